//! Built-in indicator implementations.
//!
//! Every function takes a read-only [`insider_core::BarSeries`] plus its
//! explicit window parameters and returns a typed table aligned with the
//! input positions.

pub mod adtm;
pub mod atr;
pub mod bands;
pub mod cdp;
pub mod dmi;
pub mod kdj;
pub mod macd;
pub mod mike;
pub mod momentum;
pub mod moving;
pub mod rsi;
pub mod sar;
pub mod volume;

pub use adtm::{adtm, AdtmTable};
pub use atr::{atr, AtrTable};
pub use bands::{bbiboll, boll, BbibollTable, BollTable};
pub use cdp::{cdp, CdpTable};
pub use dmi::{dmi, DmiTable};
pub use kdj::{kdj, KdjTable};
pub use macd::{macd, MacdTable};
pub use mike::{mike, MikeTable};
pub use momentum::{mi, mtm, rc, MiTable, MtmTable, RcTable};
pub use moving::{ema, env, ma, md, EmaTable, EnvTable, MaTable, MdTable};
pub use rsi::{rsi, RsiTable};
pub use sar::{sar, SarTable, TrendColor};
pub use volume::{
    obv, vma, vmacd, vosc, vrsi, vstd, ObvTable, VmaTable, VmacdTable, VoscTable, VstdTable,
};
