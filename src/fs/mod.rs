//! 文件读写：整体读入文本，原子写出结果。

pub mod atomic;

use std::fs;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::error::CipherError;

/// 读取整个文件并按 UTF-8 解码，非法字节替换为 U+FFFD。
pub fn read_text(path: &Path) -> Result<String, CipherError> {
    let bytes = fs::read(path).map_err(|source| CipherError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// 将文本原样写入文件（不追加换行）。
pub fn write_text(path: &Path, text: &str) -> Result<(), CipherError> {
    atomic::write_atomic(path, |file| file.write_all(text.as_bytes())).map_err(|source| {
        CipherError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!("wrote {} bytes to {}", text.len(), path.display());

    Ok(())
}
