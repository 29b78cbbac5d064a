//! 原子写入工具。
//!
//! 先写临时文件，成功后再替换目标文件，
//! 避免在写入失败时截断已有的输出文件。

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// 原子写文件。
///
/// 流程：
/// 1. 在目标所在目录创建临时文件；
/// 2. 调用 `write_fn` 写入完整内容；
/// 3. 写入成功后 rename 覆盖目标文件。
pub fn write_atomic<F>(target: &Path, write_fn: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    // `out.txt` 的 parent 为空串，临时文件落在当前目录
    let parent = target.parent().unwrap_or(Path::new(""));

    let file_name = target.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name")
    })?;

    let tmp_path = build_tmp_path(parent, file_name);
    let mut tmp_file = File::create(&tmp_path)?;

    if let Err(err) = write_fn(&mut tmp_file).and_then(|()| tmp_file.sync_all()) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }
    drop(tmp_file);

    if let Err(err) = fs::rename(&tmp_path, target) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    Ok(())
}

fn build_tmp_path(parent: &Path, file_name: &std::ffi::OsStr) -> PathBuf {
    let counter = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);

    let mut name = std::ffi::OsString::from(".");
    name.push(file_name);
    name.push(format!(".tmp-{}-{counter}", std::process::id()));

    parent.join(name)
}
