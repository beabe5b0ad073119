//! JSON save and restore of assemblies
//!
//! Only the tile set, the placements and the threshold are written. Loading
//! replays the placements, which rebuilds the frontier.

use std::fs;
use std::path::Path;

use crate::algorithm::assembly::TileAssembly;
use crate::io::error::{Result, file_system_error};

/// Serialize an assembly to pretty-printed JSON
///
/// # Errors
///
/// Returns a serialization error if encoding fails
pub fn to_json(assembly: &TileAssembly) -> Result<String> {
    Ok(serde_json::to_string_pretty(assembly)?)
}

/// Rebuild an assembly from its JSON record
///
/// # Errors
///
/// Returns a serialization error if the record is malformed: a missing
/// field, a wrong value type, an unparseable position key, or an out of
/// range threshold
pub fn from_json(json: &str) -> Result<TileAssembly> {
    Ok(serde_json::from_str(json)?)
}

/// Write an assembly to a JSON file, creating parent directories
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written
pub fn save_assembly(assembly: &TileAssembly, path: &Path) -> Result<()> {
    let json = to_json(assembly)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    fs::write(path, json).map_err(|e| file_system_error(path, "write assembly", e))
}

/// Read an assembly from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its record is malformed
pub fn load_assembly(path: &Path) -> Result<TileAssembly> {
    let json =
        fs::read_to_string(path).map_err(|e| file_system_error(path, "read assembly", e))?;
    from_json(&json)
}
