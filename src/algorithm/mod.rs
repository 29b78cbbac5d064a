//! 算法选择模块。
//!
//! 由 (模式, 算法名) 纯函数式地选出四种变换之一，具体实现见 `algorithms`。

use log::debug;

use crate::algorithms::{shift, unicode};
use crate::error::CipherError;

/// 加密或解密。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    /// `-mode` 取值：只有 `enc` 表示加密，其余一律视为解密。
    pub fn from_flag(value: &str) -> Self {
        match value {
            "enc" => Self::Encrypt,
            _ => Self::Decrypt,
        }
    }
}

/// 支持的替换算法。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// 仅移动拉丁字母，大小写各自循环
    Shift,
    /// 移动所有字符的码点
    Unicode,
}

impl Algorithm {
    pub const SHIFT_NAME: &'static str = "shift";
    pub const UNICODE_NAME: &'static str = "unicode";

    pub fn name(self) -> &'static str {
        match self {
            Self::Shift => Self::SHIFT_NAME,
            Self::Unicode => Self::UNICODE_NAME,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            Self::SHIFT_NAME => Some(Self::Shift),
            Self::UNICODE_NAME => Some(Self::Unicode),
            _ => None,
        }
    }
}

/// 四种变换。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    ShiftEncrypt,
    ShiftDecrypt,
    UnicodeEncrypt,
    UnicodeDecrypt,
}

impl Variant {
    pub fn new(mode: Mode, algorithm: Algorithm) -> Self {
        match (algorithm, mode) {
            (Algorithm::Shift, Mode::Encrypt) => Self::ShiftEncrypt,
            (Algorithm::Shift, Mode::Decrypt) => Self::ShiftDecrypt,
            (Algorithm::Unicode, Mode::Encrypt) => Self::UnicodeEncrypt,
            (Algorithm::Unicode, Mode::Decrypt) => Self::UnicodeDecrypt,
        }
    }

    /// 对整段文本执行变换，输出字符数与输入一致。
    pub fn apply(self, text: &str, key: i32) -> Result<String, CipherError> {
        match self {
            Self::ShiftEncrypt => shift::encrypt(text, key),
            Self::ShiftDecrypt => shift::decrypt(text, key),
            Self::UnicodeEncrypt => Ok(unicode::encrypt(text, key)),
            Self::UnicodeDecrypt => Ok(unicode::decrypt(text, key)),
        }
    }
}

/// 根据模式与算法名选择变换，未知算法名返回错误。
pub fn select_variant(mode: Mode, algorithm: &str) -> Result<Variant, CipherError> {
    let algorithm = Algorithm::from_name(algorithm)
        .ok_or_else(|| CipherError::UnknownAlgorithm(algorithm.to_owned()))?;

    let variant = Variant::new(mode, algorithm);
    debug!("selected {variant:?}");

    Ok(variant)
}
