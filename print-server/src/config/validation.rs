//! Setting value validation.

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "SERVER_PORT" => {
            let v: u16 = value.parse().map_err(|_| "must be a port number")?;
            if v == 0 {
                return Err("must be between 1 and 65535".into());
            }
        }
        "DEFAULT_DPI" => validate_int_range(value, 100, 600)?,
        "DEFAULT_THRESHOLD" => validate_int_range(value, 0, 255)?,
        "CONVERT_TIMEOUT_MS" => validate_int_range(value, 100, 60_000)?,
        "MAX_IMAGE_BYTES" => validate_int_range(value, 1, 50 * 1024 * 1024)?,
        "MAX_LABEL_DOTS" => validate_int_range(value, 1, 16384 * 16384)?,
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if !(min..=max).contains(&v) {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
