//! 失败上报策略
//!
//! 默认与既有行为保持一致：任何失败都只在标准输出打印 `Error`，
//! 进程正常退出。需要排查问题时可切换为详细模式或非零退出码。

use std::io::Write;
use std::process::ExitCode;

/// 打印到标准输出的统一失败信息
pub const GENERIC_FAILURE: &str = "Error";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportMode {
    /// 只在 stdout 打印 `Error`
    #[default]
    Generic,
    /// 在 stderr 打印完整错误链
    Detailed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reporter {
    pub mode: ReportMode,
    /// 失败时返回退出码 1
    pub fail_exit_code: bool,
}

impl Reporter {
    pub fn new(mode: ReportMode, fail_exit_code: bool) -> Self {
        Self {
            mode,
            fail_exit_code,
        }
    }

    /// 按策略输出错误，返回进程退出码
    pub fn report<O, E>(&self, err: anyhow::Error, stdout: &mut O, stderr: &mut E) -> ExitCode
    where
        O: Write,
        E: Write,
    {
        let _ = match self.mode {
            ReportMode::Generic => writeln!(stdout, "{GENERIC_FAILURE}"),
            ReportMode::Detailed => writeln!(stderr, "Error: {err:#}"),
        };

        if self.fail_exit_code {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}
