use nb_core::NumBurstError;
use std::fmt::Display;

fn map_error(code: &'static str, error: impl Display) -> NumBurstError {
    NumBurstError::new(code, error.to_string())
}

pub(crate) fn emit_error(error: NumBurstError) -> i32 {
    println!("RESULT:ERROR");
    println!("ERROR_CODE:{}", error.code);
    println!(
        "ERROR_MSG_JSON:{}",
        serde_json::to_string(&error.message).expect("string json")
    );
    1
}

pub(crate) fn map_cli_io(error: std::io::Error) -> NumBurstError {
    map_error("CLI_IO", error)
}

pub(crate) fn map_cli_template_read(error: std::io::Error) -> NumBurstError {
    map_error("CLI_TEMPLATE_READ", error)
}

pub(crate) fn map_cli_ranges_read(error: std::io::Error) -> NumBurstError {
    map_error("CLI_RANGES_READ", error)
}

pub(crate) fn map_cli_ranges_invalid(error: serde_json::Error) -> NumBurstError {
    map_error("CLI_RANGES_INVALID", error)
}
