use crate::core::{
    config::MessageFormatStore, message::is_valid_template, print_info, print_success, Result,
};

/// Shows or updates the persisted message decoration template.
///
/// Without an argument the effective template is printed. With one, it is
/// persisted when it carries both placeholders; anything else clears the
/// stored value back to the pass-through default.
pub fn execute_format(store: &mut dyn MessageFormatStore, noun: Option<&str>) -> Result<()> {
    match noun {
        None => print_info(&store.format()),
        Some(value) => {
            store.set(value)?;
            if is_valid_template(value) {
                print_success("Message format updated");
            } else {
                print_success("Message format reset to default");
            }
        }
    }
    Ok(())
}
