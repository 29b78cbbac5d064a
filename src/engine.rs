//! 执行流程
//!
//! 一次运行严格按以下顺序进行：
//! 1. 根据模式与算法名选择变换（未知算法在读文件前失败）
//! 2. 取得源文本：输入文件整体读入，或直接使用内联数据
//! 3. 执行变换
//! 4. 写入输出文件，或打印到标准输出（附带换行）

use std::io::Write;

use log::debug;

use crate::algorithm::select_variant;
use crate::error::CipherError;
use crate::fs;
use crate::params::{Params, Sink, Source};

/// 执行并把标准输出部分写到 `stdout`
pub fn execute_to<W: Write>(params: &Params, stdout: &mut W) -> Result<(), CipherError> {
    let variant = select_variant(params.mode, &params.algorithm)?;

    let text = match &params.source {
        Source::Inline(data) => data.clone(),
        Source::File(path) => fs::read_text(path)?,
    };

    let output = variant.apply(&text, params.key)?;

    match &params.sink {
        Sink::File(path) => fs::write_text(path, &output),
        Sink::Stdout => {
            debug!("printing {} chars to stdout", output.chars().count());
            writeln!(stdout, "{output}")
                .and_then(|()| stdout.flush())
                .map_err(CipherError::Stdout)
        }
    }
}

/// 执行并输出到进程标准输出
pub fn execute(params: &Params) -> Result<(), CipherError> {
    execute_to(params, &mut std::io::stdout().lock())
}
