mod file;

pub use file::TranslationCache;
