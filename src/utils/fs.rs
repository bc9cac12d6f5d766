use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::utils::error::{BoxResult, MdtocError};

/// Check if a path exists and is a file
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}

/// Read a file as a list of lines with `\n` / `\r\n` endings stripped.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD instead of failing the read.
pub fn read_lines<P: AsRef<Path>>(path: P) -> BoxResult<Vec<String>> {
    let path = path.as_ref();
    let open_err = |e: io::Error| MdtocError::InputOpen(path.to_path_buf(), e);

    // only a definite "not found" counts as missing; other stat errors are open failures
    if !path.try_exists().map_err(open_err)? {
        return Err(MdtocError::InputNotFound(path.to_path_buf()).into());
    }

    let file = fs::File::open(path).map_err(open_err)?;
    let mut lines = Vec::new();
    for chunk in BufReader::new(file).split(b'\n') {
        let mut bytes = chunk.map_err(open_err)?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        lines.push(String::from_utf8_lossy(&bytes).into_owned());
    }

    Ok(lines)
}

/// Write a string to a file, creating the file and its parent directories if needed
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    let path = path.as_ref();
    let create_err = |e: io::Error| MdtocError::OutputCreate(path.to_path_buf(), e);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(create_err)?;
        }
    }

    let mut file = fs::File::create(path).map_err(create_err)?;
    file.write_all(contents.as_bytes()).map_err(create_err)?;
    Ok(())
}
