mod input;
mod month;
mod price;
mod results;

pub use input::{DcaInput, DcaRequest};
pub use month::YearMonth;
pub use price::{PricePoint, earliest_date, is_strictly_ascending, within};
pub use results::{ChartDataPoint, DcaResult, DcaSummary};
