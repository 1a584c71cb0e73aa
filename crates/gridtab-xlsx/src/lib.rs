//! # gridtab-xlsx
//!
//! XLSX (Office Open XML) reader and writer for gridtab.
//!
//! Works on [`gridtab_core::RawWorkbook`], the codec form of a workbook;
//! [`XlsxCodec`] plugs it into `Workbook::decode` / `Workbook::encode`.

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use codec::XlsxCodec;
pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;
pub use writer::XlsxWriter;
