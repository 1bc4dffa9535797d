mod borrowed;
mod nom_parser;
mod types;

pub use self::borrowed::MessageRef;
pub use self::nom_parser::ParsedMessage;
pub use self::types::Message;
