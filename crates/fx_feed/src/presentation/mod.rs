//! View-state adapters over delivered snapshots.
//!
//! Nothing here feeds back into rate state:
//! - [`RowFlash`]/[`RowBook`]: transient changed-and-which-way markers
//! - [`Sparkline`]: recent bid history and its polyline
//! - [`RowOrder`]: user-chosen, persisted row order
//! - `format_*`: cell text

mod flash;
mod format;
mod ordering;
mod sparkline;

pub use flash::{FlashSide, RowBook, RowFlash};
pub use format::{
    format_amount, format_change, format_change_pct, format_percent, format_rate, format_spread,
    relative_time,
};
pub use ordering::{RowOrder, RowOrderDocument, ROW_ORDER_STORAGE_KEY, ROW_ORDER_VERSION};
pub use sparkline::{Sparkline, SPARKLINE_PADDING};
