//! 码点移位算法
//!
//! 所有字符按 Unicode 标量值整体移动，跳过代理区（U+D800..U+DFFF），
//! 超出范围时在全部标量值内循环，因此任意 key 都能精确还原。

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_LEN: u32 = 0x800;

/// 合法标量值总数
const SCALAR_COUNT: i64 = 0x11_0000 - SURROGATE_LEN as i64;

pub fn encrypt(text: &str, shift: i32) -> String {
    text.chars().map(|ch| move_char(ch, i64::from(shift))).collect()
}

pub fn decrypt(text: &str, shift: i32) -> String {
    text.chars().map(|ch| move_char(ch, -i64::from(shift))).collect()
}

fn move_char(ch: char, offset: i64) -> char {
    from_rank((to_rank(ch) + offset).rem_euclid(SCALAR_COUNT))
}

/// 字符在去掉代理区后的连续序号
fn to_rank(ch: char) -> i64 {
    let value = u32::from(ch);
    let rank = if value >= SURROGATE_START + SURROGATE_LEN {
        value - SURROGATE_LEN
    } else {
        value
    };
    i64::from(rank)
}

fn from_rank(rank: i64) -> char {
    // rank 已落在 0..SCALAR_COUNT 内
    let rank = rank as u32;
    let value = if rank >= SURROGATE_START {
        rank + SURROGATE_LEN
    } else {
        rank
    };
    char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
}
