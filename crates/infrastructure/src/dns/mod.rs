pub mod answer;
pub mod prober;
pub mod query;
pub mod transport;

pub use answer::{AnswerParser, ParsedAnswer};
pub use prober::UdpRecordProber;
pub use query::QueryBuilder;
pub use transport::UdpExchange;
