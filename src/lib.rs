pub mod algorithm;
pub mod algorithms;
pub mod engine;
pub mod error;
pub mod fs;
pub mod params;
pub mod report;

pub use algorithm::{Algorithm, Mode, Variant, select_variant};
pub use error::CipherError;
pub use params::{Params, Sink, Source};
pub use report::{ReportMode, Reporter};

/// 解析参数并完成一次完整运行
pub fn run<I, S>(args: I) -> Result<(), CipherError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let params = Params::resolve(args)?;
    engine::execute(&params)
}

/// 直接对内存中的文本加密
pub fn encrypt(text: &str, key: i32, algorithm: Algorithm) -> Result<String, CipherError> {
    Variant::new(Mode::Encrypt, algorithm).apply(text, key)
}

/// 直接对内存中的文本解密
pub fn decrypt(text: &str, key: i32, algorithm: Algorithm) -> Result<String, CipherError> {
    Variant::new(Mode::Decrypt, algorithm).apply(text, key)
}
