//! 命令行参数解析
//!
//! 将 `-flag value` 形式的参数序列解析为一次运行所需的 [`Params`]。
//!
//! 解析规则：
//! - 参数两两成对消费（flag, value），未知 flag 直接忽略
//! - 末尾落单的 flag 同样忽略
//! - 输入来源是单一的 [`Source`]，按参数顺序逐条更新：
//!   `-data` 总会覆盖已设置的输入文件；
//!   `-in` 在内联数据非空时不生效
//!
//! 本模块不做任何 I/O，文件读取推迟到执行阶段。

use std::path::PathBuf;

use log::{debug, warn};

use crate::algorithm::Mode;
use crate::error::CipherError;

/// 未指定 `-alg` 时使用的算法名
pub const DEFAULT_ALGORITHM: &str = "shift";

/// 待处理文本的来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// 命令行直接给出的文本（可能为空）
    Inline(String),
    /// 需要在执行时整体读入的文件
    File(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Source::Inline(String::new())
    }
}

impl Source {
    /// `-data`：无条件替换当前来源
    fn set_data(&mut self, data: &str) {
        *self = Source::Inline(data.to_owned());
    }

    /// `-in`：内联数据非空时不生效
    fn set_input_file(&mut self, path: &str) {
        if let Source::Inline(data) = self {
            if !data.is_empty() {
                warn!("ignoring -in {path:?}: inline data already set");
                return;
            }
        }

        *self = if path.is_empty() {
            Source::default()
        } else {
            Source::File(PathBuf::from(path))
        };
    }
}

/// 结果输出位置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Sink {
    #[default]
    Stdout,
    File(PathBuf),
}

/// 解析完成的运行参数，构建后不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub mode: Mode,
    /// 原始算法名，未知名称在执行阶段才报错
    pub algorithm: String,
    pub key: i32,
    pub source: Source,
    pub sink: Sink,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            mode: Mode::Encrypt,
            algorithm: DEFAULT_ALGORITHM.to_owned(),
            key: 0,
            source: Source::default(),
            sink: Sink::Stdout,
        }
    }
}

impl Params {
    /// 按顺序解析参数序列（不含程序名）
    pub fn resolve<I, S>(args: I) -> Result<Self, CipherError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let mut params = Params::default();

        for pair in args.chunks_exact(2) {
            params.apply(pair[0].as_ref(), pair[1].as_ref())?;
        }

        if args.len() % 2 == 1 {
            debug!("ignoring trailing flag {:?}", args[args.len() - 1].as_ref());
        }

        Ok(params)
    }

    fn apply(&mut self, flag: &str, value: &str) -> Result<(), CipherError> {
        debug!("flag {flag} = {value:?}");

        match flag {
            "-mode" => self.mode = Mode::from_flag(value),
            "-key" => self.key = parse_key(value)?,
            "-data" => self.source.set_data(value),
            "-in" => self.source.set_input_file(value),
            "-out" => {
                self.sink = if value.is_empty() {
                    Sink::Stdout
                } else {
                    Sink::File(PathBuf::from(value))
                }
            }
            "-alg" => self.algorithm = value.to_owned(),
            _ => debug!("ignoring unknown flag {flag:?}"),
        }

        Ok(())
    }
}

fn parse_key(value: &str) -> Result<i32, CipherError> {
    value.parse().map_err(|source| CipherError::InvalidKey {
        value: value.to_owned(),
        source,
    })
}
