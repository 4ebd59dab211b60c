pub fn validate_source_name(name: &str, entity: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err(format!("{entity} name cannot be empty"));
    }
    if name.len() > 200 {
        return Err(format!("{entity} name cannot exceed 200 characters"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(format!("{entity} name cannot contain path separators"));
    }
    if name == "." || name == ".." {
        return Err(format!("{entity} name cannot be a relative path component"));
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), String> {
    if url.len() > 2048 {
        return Err("URL cannot exceed 2048 characters".to_string());
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }
    Ok(())
}
