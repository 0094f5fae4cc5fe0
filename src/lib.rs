pub mod convert;
pub mod dict;
pub mod lang;
pub mod phonemy;
pub mod segment;
pub mod tokenize;
pub mod unicode;
pub mod vocab;

pub use convert::en::{EnFallback, EnglishConverter};
pub use convert::ja::{JaConfig, JapaneseConverter, MoraicNasal, WordSpacing};
pub use convert::zh::ChineseConverter;
pub use convert::zh::syllable::{Tone, ToneStyle};
pub use convert::{Convert, ConvertError};
pub use dict::{DictError, EnglishDict, PinyinDict};
pub use lang::Lang;
pub use phonemy::{Phonemy, PhonemyError};
pub use segment::Segment;
pub use tokenize::{KanaTokenizer, Pos, Token, Tokenize};
