use crate::domain::AppError;

pub fn run_configs() -> Result<(), AppError> {
    let names = crate::app::api::list_configs()?;
    if names.is_empty() {
        println!("No saved configurations. Use `nextdeploy setup --save-as NAME` to create one.");
        return Ok(());
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}
