//! File adapters: roster workbooks in, letters and the leftover-duty sheet out.

pub mod docx_write;
pub mod excel_read;
pub mod excel_write;
