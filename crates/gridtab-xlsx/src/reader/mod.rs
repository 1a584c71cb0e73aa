//! XLSX reader

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};
use gridtab_core::{CellAddress, CellMap, CellRange, CellValue, RawWorkbook, MAX_COLS, MAX_ROWS};

/// Decode Excel's `_xHHHH_` escape sequences in strings.
///
/// Excel uses this format to encode special characters in XML:
/// - `_x000d_` = CR (carriage return)
/// - `_x000a_` = LF (line feed)
/// - `_x0009_` = Tab
/// - `_x005f_` = Underscore (escaped underscore)
pub(crate) fn decode_excel_escapes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '_' {
            result.push(c);
            continue;
        }

        let mut hex_chars = String::new();
        let mut decoded = None;
        let mut saw_x = false;

        if chars.peek() == Some(&'x') {
            chars.next();
            saw_x = true;

            while hex_chars.len() < 4 {
                match chars.peek() {
                    Some(&ch) if ch.is_ascii_hexdigit() => {
                        hex_chars.push(ch);
                        chars.next();
                    }
                    _ => break,
                }
            }

            if hex_chars.len() == 4 && chars.peek() == Some(&'_') {
                decoded = u32::from_str_radix(&hex_chars, 16)
                    .ok()
                    .and_then(char::from_u32);
                if decoded.is_some() {
                    chars.next();
                }
            }
        }

        match decoded {
            Some(ch) => result.push(ch),
            None => {
                // not an escape, keep what was consumed
                result.push('_');
                if saw_x {
                    result.push('x');
                    result.push_str(&hex_chars);
                }
            }
        }
    }

    result
}

/// XLSX file reader
///
/// Only cell values survive reading: formulas contribute their cached value,
/// booleans become `"true"`/`"false"` text and error cells keep their error
/// text. Styles, comments and other worksheet parts are ignored.
pub struct XlsxReader;

impl XlsxReader {
    /// Read a workbook from a file path
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<RawWorkbook> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Read a workbook from a reader
    pub fn read<R: Read + Seek>(reader: R) -> XlsxResult<RawWorkbook> {
        let mut archive = zip::ZipArchive::new(reader)?;

        if archive.by_name("[Content_Types].xml").is_err() {
            return Err(XlsxError::InvalidFormat(
                "Missing [Content_Types].xml".into(),
            ));
        }

        let shared_strings = Self::read_shared_strings(&mut archive)?;
        let sheet_info = Self::read_workbook_xml(&mut archive)?;
        let sheet_paths = Self::read_workbook_rels(&mut archive)?;

        let mut workbook = RawWorkbook::default();

        for (name, r_id) in sheet_info {
            let Some(path) = sheet_paths.get(&r_id) else {
                log::warn!("Sheet '{name}' has no worksheet relationship ({r_id}), skipped");
                continue;
            };
            if workbook.sheets.contains_key(&name) {
                return Err(XlsxError::InvalidFormat(format!(
                    "Duplicate sheet name '{name}'"
                )));
            }

            let cells = Self::read_worksheet(&mut archive, path, &shared_strings)?;
            log::debug!("Read sheet '{name}' from {path}: {} cells", cells.cells.len());

            workbook.sheet_names.push(name.clone());
            workbook.sheets.insert(name, cells);
        }

        Ok(workbook)
    }

    /// Read the shared strings table
    fn read_shared_strings<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<String>> {
        let mut strings = Vec::new();

        let file = match archive.by_name("xl/sharedStrings.xml") {
            Ok(f) => f,
            Err(_) => return Ok(strings), // No shared strings is valid
        };

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        // string content keeps its surrounding whitespace
        xml_reader.trim_text(false);

        let mut buf = Vec::new();
        let mut current_string = String::new();
        let mut in_si = false;
        let mut in_t = false;
        let mut in_phonetic = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"si" => {
                        in_si = true;
                        current_string.clear();
                    }
                    b"rPh" => in_phonetic = true,
                    b"t" if in_si && !in_phonetic => in_t = true,
                    _ => {}
                },
                Ok(Event::Empty(e)) if e.name().as_ref() == b"si" => {
                    strings.push(String::new());
                }
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"si" => {
                        strings.push(decode_excel_escapes(&current_string));
                        current_string.clear();
                        in_si = false;
                    }
                    b"rPh" => in_phonetic = false,
                    b"t" => in_t = false,
                    _ => {}
                },
                Ok(Event::Text(e)) if in_t => {
                    current_string.push_str(&e.unescape()?);
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(strings)
    }

    /// Read workbook.xml to get sheet names and rIds
    fn read_workbook_xml<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<(String, String)>> {
        let file = archive
            .by_name("xl/workbook.xml")
            .map_err(|_| XlsxError::MissingPart("xl/workbook.xml".into()))?;

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut sheets = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) if e.name().as_ref() == b"sheet" => {
                    let mut name = None;
                    let mut r_id = None;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"name" => {
                                name = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            b"r:id" => {
                                r_id = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            _ => {}
                        }
                    }

                    match (name, r_id) {
                        (Some(name), Some(r_id)) => sheets.push((name, r_id)),
                        _ => log::warn!("Skipping <sheet> without name or r:id"),
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(sheets)
    }

    /// Read workbook.xml.rels to get sheet file paths
    fn read_workbook_rels<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<HashMap<String, String>> {
        let file = archive
            .by_name("xl/_rels/workbook.xml.rels")
            .map_err(|_| XlsxError::MissingPart("xl/_rels/workbook.xml.rels".into()))?;

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut rels = HashMap::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e))
                    if e.name().as_ref() == b"Relationship" =>
                {
                    let mut id = None;
                    let mut target = None;
                    let mut rel_type = None;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"Id" => {
                                id = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            b"Target" => {
                                target = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            b"Type" => {
                                rel_type = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            _ => {}
                        }
                    }

                    if let (Some(id), Some(target), Some(rel_type)) = (id, target, rel_type) {
                        if rel_type.ends_with("/worksheet") {
                            // Target is relative to xl/ folder
                            let full_path = match target.strip_prefix('/') {
                                Some(absolute) => absolute.to_string(),
                                None => format!("xl/{target}"),
                            };
                            rels.insert(id, full_path);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Read the dimension and cell values of one worksheet
    fn read_worksheet<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
        path: &str,
        shared_strings: &[String],
    ) -> XlsxResult<CellMap> {
        let file = archive
            .by_name(path)
            .map_err(|_| XlsxError::MissingPart(path.to_string()))?;

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(false);

        let mut buf = Vec::new();
        let mut map = CellMap::default();

        // Position tracking for cells and rows without an `r` attribute
        let mut row_number: u32 = 0;
        let mut next_col: u16 = 0;

        let mut cell = PendingCell::default();
        let mut in_cell = false;
        let mut in_value = false;
        let mut in_inline_text = false;
        let mut in_inline_str = false;
        let mut in_phonetic = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    b"dimension" => {
                        if let Some(range) = Self::parse_dimension(&e) {
                            map.range = range;
                        }
                    }
                    b"row" => {
                        row_number = Self::row_attr(&e)
                            .unwrap_or_else(|| row_number.saturating_add(1));
                        next_col = 0;
                    }
                    b"c" => {
                        // no content, only advances the column
                        let addr = Self::cell_address(&e, row_number, next_col)?;
                        next_col = addr.col.saturating_add(1);
                    }
                    _ => {}
                },
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"row" => {
                        row_number = Self::row_attr(&e)
                            .unwrap_or_else(|| row_number.saturating_add(1));
                        next_col = 0;
                    }
                    b"c" => {
                        let addr = Self::cell_address(&e, row_number, next_col)?;
                        next_col = addr.col.saturating_add(1);
                        cell = PendingCell {
                            address: Some(addr),
                            cell_type: Self::type_attr(&e),
                            ..PendingCell::default()
                        };
                        in_cell = true;
                    }
                    b"v" if in_cell => in_value = true,
                    b"f" if in_cell => cell.has_formula = true,
                    b"is" if in_cell => {
                        in_inline_str = true;
                        cell.inline = Some(String::new());
                    }
                    b"rPh" if in_inline_str => in_phonetic = true,
                    b"t" if in_inline_str && !in_phonetic => in_inline_text = true,
                    _ => {}
                },
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"c" => {
                        if let Some((address, value)) =
                            Self::finish_cell(std::mem::take(&mut cell), shared_strings)?
                        {
                            map.cells.insert(address.to_a1_string(), value);
                        }
                        in_cell = false;
                    }
                    b"v" => in_value = false,
                    b"is" => in_inline_str = false,
                    b"rPh" => in_phonetic = false,
                    b"t" => in_inline_text = false,
                    b"sheetData" => {
                        // nothing after sheetData holds values
                        break;
                    }
                    _ => {}
                },
                Ok(Event::Text(e)) => {
                    if in_value {
                        cell.value
                            .get_or_insert_with(String::new)
                            .push_str(&e.unescape()?);
                    } else if in_inline_text {
                        if let Some(inline) = cell.inline.as_mut() {
                            inline.push_str(&e.unescape()?);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(map)
    }

    fn parse_dimension(e: &BytesStart<'_>) -> Option<String> {
        let value = e
            .attributes()
            .flatten()
            .find(|attr| attr.key.as_ref() == b"ref")
            .and_then(|attr| attr.unescape_value().ok().map(|s| s.to_string()))?;

        match CellRange::parse(&value) {
            Ok(range) => Some(range.to_a1_string()),
            Err(err) => {
                log::warn!("Ignoring worksheet dimension '{value}': {err}");
                None
            }
        }
    }

    fn row_attr(e: &BytesStart<'_>) -> Option<u32> {
        e.attributes()
            .flatten()
            .find(|attr| attr.key.as_ref() == b"r")
            .and_then(|attr| attr.unescape_value().ok().and_then(|s| s.parse::<u32>().ok()))
    }

    fn type_attr(e: &BytesStart<'_>) -> Option<String> {
        e.attributes()
            .flatten()
            .find(|attr| attr.key.as_ref() == b"t")
            .and_then(|attr| attr.unescape_value().ok().map(|s| s.to_string()))
    }

    /// Address of a `<c>` element, from its `r` attribute or its position
    fn cell_address(e: &BytesStart<'_>, row_number: u32, next_col: u16) -> XlsxResult<CellAddress> {
        let reference = e
            .attributes()
            .flatten()
            .find(|attr| attr.key.as_ref() == b"r")
            .and_then(|attr| attr.unescape_value().ok().map(|s| s.to_string()));

        match reference {
            Some(cell_ref) => CellAddress::parse(&cell_ref).map_err(|e| {
                XlsxError::Parse(format!("Invalid cell reference '{cell_ref}': {e}"))
            }),
            None if row_number == 0 => Err(XlsxError::Parse(
                "Cell without reference outside of a row".into(),
            )),
            None if row_number > MAX_ROWS || next_col >= MAX_COLS => Err(XlsxError::Parse(format!(
                "Cell position (row {row_number}, column {}) is outside the grid",
                next_col as u32 + 1
            ))),
            None => Ok(CellAddress::new(row_number - 1, next_col)),
        }
    }

    /// Map a finished `<c>` element to its cell value
    fn finish_cell(
        cell: PendingCell,
        shared_strings: &[String],
    ) -> XlsxResult<Option<(CellAddress, CellValue)>> {
        let Some(address) = cell.address else {
            return Ok(None);
        };

        if cell.cell_type.as_deref() == Some("inlineStr") {
            let text = cell.inline.or(cell.value).unwrap_or_default();
            return Ok(Some((address, CellValue::Text(decode_excel_escapes(&text)))));
        }

        let Some(value) = cell.value else {
            if cell.has_formula {
                log::debug!("Formula cell {address} has no cached value, skipped");
            }
            return Ok(None);
        };

        let cell_value = match cell.cell_type.as_deref() {
            // Shared string
            Some("s") => {
                let idx: usize = value.trim().parse().map_err(|_| {
                    XlsxError::Parse(format!("Invalid shared string index: {value}"))
                })?;
                let s = shared_strings.get(idx).ok_or_else(|| {
                    XlsxError::Parse(format!("Shared string index {idx} out of bounds"))
                })?;
                CellValue::Text(s.clone())
            }

            // Boolean
            Some("b") => {
                let value = value.trim();
                CellValue::from(value == "1" || value.eq_ignore_ascii_case("true"))
            }

            // Error cells keep their error text (#DIV/0!, #N/A, ...)
            Some("e") => CellValue::Text(value.trim().to_string()),

            // Formula string result
            Some("str") => CellValue::Text(decode_excel_escapes(&value)),

            // Number (default type or explicit "n")
            None | Some("n") => match value.trim().parse::<f64>() {
                Ok(n) => CellValue::Number(n),
                Err(_) => {
                    log::debug!("Cell {address} has non-numeric value '{value}', kept as text");
                    CellValue::Text(value)
                }
            },

            Some(other) => {
                log::debug!("Cell {address} has unknown type '{other}', kept as text");
                CellValue::Text(value)
            }
        };

        Ok(Some((address, cell_value)))
    }
}

/// A `<c>` element being read
#[derive(Debug, Default)]
struct PendingCell {
    address: Option<CellAddress>,
    cell_type: Option<String>,
    value: Option<String>,
    inline: Option<String>,
    has_formula: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_decode_excel_escapes_carriage_return() {
        assert_eq!(decode_excel_escapes("hello_x000d_world"), "hello\rworld");
    }

    #[test]
    fn test_decode_excel_escapes_multiple() {
        assert_eq!(
            decode_excel_escapes("line1_x000d__x000a_line2"),
            "line1\r\nline2"
        );
    }

    #[test]
    fn test_decode_excel_escapes_underscore() {
        assert_eq!(decode_excel_escapes("under_x005f_score"), "under_score");
        assert_eq!(decode_excel_escapes("snake_case"), "snake_case");
    }

    #[test]
    fn test_decode_excel_escapes_partial_sequence() {
        // Incomplete sequences should be left as-is
        assert_eq!(decode_excel_escapes("_x00"), "_x00");
        assert_eq!(decode_excel_escapes("_x000d"), "_x000d");
        assert_eq!(decode_excel_escapes("a_"), "a_");
    }

    #[test]
    fn test_decode_excel_escapes_uppercase() {
        assert_eq!(decode_excel_escapes("_x000D_"), "\r");
        assert_eq!(decode_excel_escapes("_x000A_"), "\n");
    }

    const CONTENT_TYPES: &[u8] = br#"<?xml version="1.0"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/></Types>"#;
    const WORKBOOK_RELS: &[u8] = br#"<?xml version="1.0"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

    /// Build a single-sheet package around the given parts
    fn package(sheet_name: &str, sheet_xml: &str, shared_strings: Option<&str>) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let cursor = Cursor::new(&mut buf);
            let mut zip = zip::ZipWriter::new(cursor);
            let options = zip::write::SimpleFileOptions::default();

            zip.start_file("[Content_Types].xml", options).unwrap();
            zip.write_all(CONTENT_TYPES).unwrap();

            zip.start_file("xl/workbook.xml", options).unwrap();
            write!(zip, r#"<?xml version="1.0"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="{sheet_name}" sheetId="1" r:id="rId1"/></sheets></workbook>"#).unwrap();

            zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
            zip.write_all(WORKBOOK_RELS).unwrap();

            if let Some(sst) = shared_strings {
                zip.start_file("xl/sharedStrings.xml", options).unwrap();
                zip.write_all(sst.as_bytes()).unwrap();
            }

            zip.start_file("xl/worksheets/sheet1.xml", options).unwrap();
            zip.write_all(sheet_xml.as_bytes()).unwrap();

            zip.finish().unwrap();
        }
        buf
    }

    #[test]
    fn test_read_empty_xlsx() {
        let bytes = package(
            "Sheet1",
            r#"<?xml version="1.0"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData></sheetData></worksheet>"#,
            None,
        );

        let workbook = XlsxReader::read(Cursor::new(bytes)).unwrap();

        assert_eq!(workbook.sheet_names, vec!["Sheet1".to_string()]);
        let sheet = &workbook.sheets["Sheet1"];
        assert!(sheet.cells.is_empty());
        assert_eq!(sheet.range, "A1");
    }

    #[test]
    fn test_read_cell_types() {
        let sheet_xml = r#"<?xml version="1.0"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <dimension ref="A1:D3"/>
  <sheetData>
    <row r="1">
      <c r="A1" t="s"><v>0</v></c>
      <c r="B1"><v>42.5</v></c>
      <c r="C1" t="b"><v>1</v></c>
      <c r="D1" t="e"><v>#DIV/0!</v></c>
    </row>
    <row r="2">
      <c r="A2" t="inlineStr"><is><t xml:space="preserve"> padded </t></is></c>
      <c r="B2"><f>B1*2</f><v>85</v></c>
      <c r="C2" t="str"><f>A1&amp;"!"</f><v>hello!</v></c>
      <c r="D2" s="3"/>
    </row>
    <row r="3">
      <c r="A3"><f>NOW()</f></c>
      <c r="B3" t="s"><v>1</v></c>
    </row>
  </sheetData>
</worksheet>"#;
        let sst = r#"<?xml version="1.0"?><sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="2" uniqueCount="2"><si><t>hello</t></si><si><r><t>line1_x000a_</t></r><r><t>line2</t></r></si></sst>"#;

        let workbook = XlsxReader::read(Cursor::new(package("Data", sheet_xml, Some(sst)))).unwrap();
        let sheet = &workbook.sheets["Data"];

        assert_eq!(sheet.range, "A1:D3");
        assert_eq!(sheet.cells["A1"], CellValue::text("hello"));
        assert_eq!(sheet.cells["B1"], CellValue::Number(42.5));
        assert_eq!(sheet.cells["C1"], CellValue::text("true"));
        assert_eq!(sheet.cells["D1"], CellValue::text("#DIV/0!"));
        assert_eq!(sheet.cells["A2"], CellValue::text(" padded "));
        assert_eq!(sheet.cells["B2"], CellValue::Number(85.0));
        assert_eq!(sheet.cells["C2"], CellValue::text("hello!"));
        assert_eq!(sheet.cells["B3"], CellValue::text("line1\nline2"));
        // style-only cell and formula without cached value
        assert!(!sheet.cells.contains_key("D2"));
        assert!(!sheet.cells.contains_key("A3"));
        assert_eq!(sheet.cells.len(), 8);
    }

    #[test]
    fn test_read_cells_without_reference() {
        let sheet_xml = r#"<?xml version="1.0"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <sheetData>
    <row><c><v>1</v></c><c/><c><v>3</v></c></row>
    <row><c t="inlineStr"><is><t>x</t></is></c></row>
  </sheetData>
</worksheet>"#;

        let workbook = XlsxReader::read(Cursor::new(package("S", sheet_xml, None))).unwrap();
        let sheet = &workbook.sheets["S"];

        assert_eq!(sheet.cells["A1"], CellValue::Number(1.0));
        assert_eq!(sheet.cells["C1"], CellValue::Number(3.0));
        assert_eq!(sheet.cells["A2"], CellValue::text("x"));
    }

    #[test]
    fn test_positional_cell_beyond_last_row() {
        let sheet_xml = r#"<worksheet><sheetData><row r="4294967295"><c r="A1"><v>1</v></c></row><row><c><v>2</v></c></row></sheetData></worksheet>"#;

        let err = XlsxReader::read(Cursor::new(package("S", sheet_xml, None))).unwrap_err();
        assert!(matches!(err, XlsxError::Parse(ref msg) if msg.contains("outside the grid")), "{err}");

        let sheet_xml = r#"<worksheet><sheetData><row r="1048577"><c><v>1</v></c></row></sheetData></worksheet>"#;
        let err = XlsxReader::read(Cursor::new(package("S", sheet_xml, None))).unwrap_err();
        assert!(matches!(err, XlsxError::Parse(_)), "{err}");
    }

    #[test]
    fn test_bad_shared_string_index() {
        let sheet_xml = r#"<worksheet><sheetData><row r="1"><c r="A1" t="s"><v>7</v></c></row></sheetData></worksheet>"#;

        let err = XlsxReader::read(Cursor::new(package("S", sheet_xml, None))).unwrap_err();
        assert!(matches!(err, XlsxError::Parse(_)), "{err}");
    }

    #[test]
    fn test_not_a_package() {
        let err = XlsxReader::read(Cursor::new(b"name,age\n".to_vec())).unwrap_err();
        assert!(matches!(err, XlsxError::Zip(_)), "{err}");
    }
}
