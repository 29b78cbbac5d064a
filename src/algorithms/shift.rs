//! 字母移位算法
//!
//! 只处理 ASCII 拉丁字母，大写与小写各自在 26 个字母内移动，
//! 其余字符原样保留。
//!
//! 边界行为：
//! - 加密时 `p + shift` 大于 26 才取模，恰好等于 26 时越界
//! - 解密时 `p - shift` 为负只补一次 26
//! 越界统一返回 [`CipherError::OutOfAlphabet`]。

use crate::error::CipherError;

pub const UPPER_ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWER_ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

const ALPHABET_LEN: i32 = 26;

/// 加密
pub fn encrypt(text: &str, shift: i32) -> Result<String, CipherError> {
    map_letters(text, shift, |position| {
        let moved = position.checked_add(shift)?;
        Some(if moved > ALPHABET_LEN {
            moved % ALPHABET_LEN
        } else {
            moved
        })
    })
}

/// 解密
pub fn decrypt(text: &str, shift: i32) -> Result<String, CipherError> {
    map_letters(text, shift, |position| {
        let moved = position.checked_sub(shift)?;
        Some(if moved < 0 {
            moved + ALPHABET_LEN
        } else {
            moved
        })
    })
}

/// 逐字符替换字母，`move_fn` 把字母序号映射为新序号（可能越界）
fn map_letters<F>(text: &str, shift: i32, move_fn: F) -> Result<String, CipherError>
where
    F: Fn(i32) -> Option<i32>,
{
    text.chars()
        .map(|ch| {
            let alphabet = if ch.is_ascii_uppercase() {
                UPPER_ALPHABET
            } else if ch.is_ascii_lowercase() {
                LOWER_ALPHABET
            } else {
                return Ok(ch);
            };

            let position = i32::from(ch as u8 - alphabet[0]);

            move_fn(position)
                .and_then(|moved| usize::try_from(moved).ok())
                .and_then(|index| alphabet.get(index))
                .map(|&letter| char::from(letter))
                .ok_or(CipherError::OutOfAlphabet { ch, shift })
        })
        .collect()
}
