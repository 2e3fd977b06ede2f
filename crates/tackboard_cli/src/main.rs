//! Database bootstrap entry point.
//!
//! # Responsibility
//! - Resolve the configured database path, open it and apply migrations.
//! - Keep exit codes script-friendly: 0 on success, 1 on any failure.

use std::process::ExitCode;

fn main() -> ExitCode {
    let db_arg = std::env::args().nth(1);
    match run(db_arg.as_deref()) {
        Ok(path) => {
            println!("tackboard_core version={}", tackboard_core::core_version());
            println!("database ready at {path}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("tackboard setup failed: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(db_arg: Option<&str>) -> Result<String, String> {
    let path = tackboard_core::database_path_from_env(db_arg).map_err(|err| err.to_string())?;
    let conn = tackboard_core::db::open_db(&path).map_err(|err| err.to_string())?;
    drop(conn);
    Ok(path.display().to_string())
}
