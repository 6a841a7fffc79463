mod question_page;

pub use self::question_page::*;
