//! XLSX writer

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use crate::error::XlsxResult;
use gridtab_core::{format_number, CellAddress, CellMap, CellRange, CellValue, RawWorkbook};

/// Single default cell format, enough for spreadsheet applications to open the file
const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <fonts count="1"><font><sz val="11"/><name val="Calibri"/></font></fonts>
    <fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills>
    <borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>
    <cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>
    <cellXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/></cellXfs>
    <cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>
</styleSheet>"#;

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a workbook to a file path
    pub fn write_file<P: AsRef<Path>>(workbook: &RawWorkbook, path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(workbook, BufWriter::new(file))
    }

    /// Write a workbook to a writer
    ///
    /// Sheets are written in `sheet_names` order; a name without contents is
    /// written as an empty sheet.
    pub fn write<W: Write + Seek>(workbook: &RawWorkbook, writer: W) -> XlsxResult<()> {
        let mut zip = zip::ZipWriter::new(writer);
        let sheet_count = workbook.sheet_names.len();

        Self::write_content_types(&mut zip, sheet_count)?;
        Self::write_root_rels(&mut zip)?;
        Self::write_workbook_xml(&mut zip, &workbook.sheet_names)?;
        Self::write_workbook_rels(&mut zip, sheet_count)?;
        Self::write_styles_xml(&mut zip)?;

        let empty = CellMap::default();
        for (i, name) in workbook.sheet_names.iter().enumerate() {
            let cells = workbook.sheets.get(name).unwrap_or(&empty);
            Self::write_worksheet(&mut zip, i, cells)?;
        }

        let mut writer = zip.finish()?;
        writer.flush()?;
        Ok(())
    }

    fn write_content_types<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheet_count: usize,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("[Content_Types].xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
        );

        for i in 1..=sheet_count {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/worksheets/sheet{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
            ));
        }

        content.push_str("\n</Types>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_root_rels<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("_rels/.rels", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheet_names: &[String],
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/workbook.xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>"#,
        );

        for (i, name) in sheet_names.iter().enumerate() {
            content.push_str(&format!(
                r#"
        <sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape_xml(name),
                i + 1,
                i + 1
            ));
        }

        content.push_str(
            r#"
    </sheets>
</workbook>"#,
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_rels<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheet_count: usize,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/_rels/workbook.xml.rels", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for i in 1..=sheet_count {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{i}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{i}.xml"/>"#
            ));
        }

        // Styles relationship comes after the sheets
        let styles_rid = sheet_count + 1;
        content.push_str(&format!(
            r#"
    <Relationship Id="rId{styles_rid}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#
        ));

        content.push_str("\n</Relationships>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_styles_xml<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/styles.xml", options)?;
        zip.write_all(STYLES_XML.as_bytes())?;
        Ok(())
    }

    fn write_worksheet<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        index: usize,
        cells: &CellMap,
    ) -> XlsxResult<()> {
        // Map keys sort as text ("A10" < "A2"), rows need numeric order
        let mut sorted = Vec::with_capacity(cells.cells.len());
        for (key, value) in &cells.cells {
            sorted.push((CellAddress::parse(key)?, value));
        }
        sorted.sort_by_key(|(addr, _)| (addr.row, addr.col));

        let range = CellRange::parse(&cells.range)?;

        let options = zip::write::SimpleFileOptions::default();
        zip.start_file(format!("xl/worksheets/sheet{}.xml", index + 1), options)?;

        let mut content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <dimension ref="{}"/>
    <sheetData>"#,
            range.to_a1_string()
        );

        // Sparse, row-major
        let mut current_row: Option<u32> = None;
        for (addr, value) in sorted {
            if current_row != Some(addr.row) {
                if current_row.is_some() {
                    content.push_str("\n        </row>");
                }
                content.push_str(&format!("\n        <row r=\"{}\">", addr.row + 1));
                current_row = Some(addr.row);
            }

            let cell_ref = addr.to_a1_string();
            match value {
                CellValue::Number(n) if n.is_finite() => {
                    content.push_str(&format!("\n            <c r=\"{cell_ref}\"><v>{n}</v></c>"));
                }
                CellValue::Number(n) => {
                    // NaN and infinities have no numeric cell form
                    log::warn!("Cell {cell_ref} holds {n}, written as text");
                    Self::push_inline_str(&mut content, &cell_ref, &format_number(*n));
                }
                CellValue::Text(s) => Self::push_inline_str(&mut content, &cell_ref, s),
            }
        }

        if current_row.is_some() {
            content.push_str("\n        </row>");
        }

        content.push_str("\n    </sheetData>\n</worksheet>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn push_inline_str(content: &mut String, cell_ref: &str, text: &str) {
        content.push_str(&format!(
            "\n            <c r=\"{}\" t=\"inlineStr\"><is><t xml:space=\"preserve\">{}</t></is></c>",
            cell_ref,
            escape_xml(&encode_excel_escapes(text))
        ));
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Inverse of the reader's `_xHHHH_` decoding
///
/// Control characters XML cannot carry are escaped, as is any underscore
/// that would otherwise read back as the start of an escape.
fn encode_excel_escapes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for (i, c) in s.char_indices() {
        match c {
            '\t' | '\n' => result.push(c),
            c if (c as u32) < 0x20 => result.push_str(&format!("_x{:04X}_", c as u32)),
            '_' if looks_like_escape(&s[i..]) => result.push_str("_x005F_"),
            c => result.push(c),
        }
    }

    result
}

fn looks_like_escape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 7
        && bytes[1] == b'x'
        && bytes[2..6].iter().all(u8::is_ascii_hexdigit)
        && bytes[6] == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::decode_excel_escapes;
    use crate::XlsxReader;
    use std::io::{Cursor, Read};

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut xml = String::new();
        part.read_to_string(&mut xml).unwrap();
        xml
    }

    fn write_to_vec(workbook: &RawWorkbook) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        XlsxWriter::write(workbook, &mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn test_excel_escapes_are_reversible() {
        for text in ["plain", "tab\there", "bell\u{7}", "_x000d_ literal", "a_b", "cr\r"] {
            assert_eq!(decode_excel_escapes(&encode_excel_escapes(text)), text);
        }
        assert_eq!(encode_excel_escapes("\r"), "_x000D_");
    }

    #[test]
    fn test_worksheet_layout() {
        let mut cells = CellMap::new("A1:B10");
        cells.cells.insert("A10".into(), CellValue::Number(10.0));
        cells.cells.insert("A2".into(), CellValue::Number(2.5));
        cells.cells.insert("B2".into(), CellValue::text("x < y"));

        let mut workbook = RawWorkbook::default();
        workbook.sheet_names.push("Data & more".into());
        workbook.sheets.insert("Data & more".into(), cells);

        let bytes = write_to_vec(&workbook);

        let book_xml = read_part(&bytes, "xl/workbook.xml");
        assert!(book_xml.contains(r#"name="Data &amp; more""#));

        let sheet_xml = read_part(&bytes, "xl/worksheets/sheet1.xml");
        assert!(sheet_xml.contains(r#"<dimension ref="A1:B10"/>"#));
        assert!(sheet_xml.contains(r#"<c r="A2"><v>2.5</v></c>"#));
        assert!(sheet_xml.contains("x &lt; y"));
        let row2 = sheet_xml.find(r#"<row r="2">"#).unwrap();
        let row10 = sheet_xml.find(r#"<row r="10">"#).unwrap();
        assert!(row2 < row10);
    }

    #[test]
    fn test_non_finite_numbers_become_text() {
        let mut cells = CellMap::new("A1:B1");
        cells.cells.insert("A1".into(), CellValue::Number(f64::NAN));
        cells.cells.insert("B1".into(), CellValue::Number(f64::NEG_INFINITY));

        let mut workbook = RawWorkbook::default();
        workbook.sheet_names.push("S".into());
        workbook.sheets.insert("S".into(), cells);

        let read = XlsxReader::read(Cursor::new(write_to_vec(&workbook))).unwrap();
        assert_eq!(read.sheets["S"].cells["A1"], CellValue::text("NaN"));
        assert_eq!(read.sheets["S"].cells["B1"], CellValue::text("-Infinity"));
    }

    #[test]
    fn test_bad_cell_key_is_rejected() {
        let mut cells = CellMap::default();
        cells.cells.insert("not a cell".into(), CellValue::Number(1.0));

        let mut workbook = RawWorkbook::default();
        workbook.sheet_names.push("S".into());
        workbook.sheets.insert("S".into(), cells);

        let mut cursor = Cursor::new(Vec::new());
        let err = XlsxWriter::write(&workbook, &mut cursor).unwrap_err();
        assert!(matches!(err, crate::XlsxError::Core(_)), "{err}");
    }
}
