//! Composite records of the cell wire format.
//!
//! Field order is fixed. A cell is its 14 flat fields and an end-of-record
//! marker, followed by the style record when the style flag is set and then
//! the data validation record when the validation flag is set.

use bytes::{Bytes, BytesMut};
use sheetstore_core::{
    Alignment, Border, Cell, CellType, DataValidation, Fill, Font, Hyperlink, Style,
};

use super::primitive::{
    read_bool, read_end_of_record, read_int, read_string, read_string_opt, write_bool,
    write_end_of_record, write_int, write_string, write_string_opt,
};
use crate::error::{StoreError, StoreResult};

// ============================================================================
// Style parts
// ============================================================================

fn write_border(buf: &mut BytesMut, b: &Border) {
    write_string(buf, &b.left);
    write_string(buf, &b.left_color);
    write_string(buf, &b.right);
    write_string(buf, &b.right_color);
    write_string(buf, &b.top);
    write_string(buf, &b.top_color);
    write_string(buf, &b.bottom);
    write_string(buf, &b.bottom_color);
}

fn read_border(buf: &mut Bytes) -> StoreResult<Border> {
    Ok(Border {
        left: read_string(buf, "border.left")?,
        left_color: read_string(buf, "border.left_color")?,
        right: read_string(buf, "border.right")?,
        right_color: read_string(buf, "border.right_color")?,
        top: read_string(buf, "border.top")?,
        top_color: read_string(buf, "border.top_color")?,
        bottom: read_string(buf, "border.bottom")?,
        bottom_color: read_string(buf, "border.bottom_color")?,
    })
}

fn write_fill(buf: &mut BytesMut, f: &Fill) {
    write_string(buf, &f.pattern_type);
    write_string(buf, &f.bg_color);
    write_string(buf, &f.fg_color);
}

fn read_fill(buf: &mut Bytes) -> StoreResult<Fill> {
    Ok(Fill {
        pattern_type: read_string(buf, "fill.pattern_type")?,
        bg_color: read_string(buf, "fill.bg_color")?,
        fg_color: read_string(buf, "fill.fg_color")?,
    })
}

fn write_font(buf: &mut BytesMut, f: &Font) {
    write_int(buf, f.size);
    write_string(buf, &f.name);
    write_int(buf, f.family);
    write_int(buf, f.charset);
    write_string(buf, &f.color);
    write_bool(buf, f.bold);
    write_bool(buf, f.italic);
    write_bool(buf, f.underline);
}

fn read_font(buf: &mut Bytes) -> StoreResult<Font> {
    Ok(Font {
        size: read_int(buf, "font.size")?,
        name: read_string(buf, "font.name")?,
        family: read_int(buf, "font.family")?,
        charset: read_int(buf, "font.charset")?,
        color: read_string(buf, "font.color")?,
        bold: read_bool(buf, "font.bold")?,
        italic: read_bool(buf, "font.italic")?,
        underline: read_bool(buf, "font.underline")?,
    })
}

fn write_alignment(buf: &mut BytesMut, a: &Alignment) {
    write_string(buf, &a.horizontal);
    write_int(buf, a.indent);
    write_bool(buf, a.shrink_to_fit);
    write_int(buf, a.text_rotation);
    write_string(buf, &a.vertical);
    write_bool(buf, a.wrap_text);
}

fn read_alignment(buf: &mut Bytes) -> StoreResult<Alignment> {
    Ok(Alignment {
        horizontal: read_string(buf, "alignment.horizontal")?,
        indent: read_int(buf, "alignment.indent")?,
        shrink_to_fit: read_bool(buf, "alignment.shrink_to_fit")?,
        text_rotation: read_int(buf, "alignment.text_rotation")?,
        vertical: read_string(buf, "alignment.vertical")?,
        wrap_text: read_bool(buf, "alignment.wrap_text")?,
    })
}

// ============================================================================
// Style and data validation records
// ============================================================================

/// Write a style record, including its end-of-record marker.
pub fn encode_style(style: &Style, buf: &mut BytesMut) {
    write_border(buf, &style.border);
    write_fill(buf, &style.fill);
    write_font(buf, &style.font);
    write_alignment(buf, &style.alignment);
    write_bool(buf, style.apply_border);
    write_bool(buf, style.apply_fill);
    write_bool(buf, style.apply_font);
    write_bool(buf, style.apply_alignment);
    write_end_of_record(buf);
}

/// Read a style record written by [`encode_style`].
pub fn decode_style(buf: &mut Bytes) -> StoreResult<Style> {
    let style = Style {
        border: read_border(buf)?,
        fill: read_fill(buf)?,
        font: read_font(buf)?,
        alignment: read_alignment(buf)?,
        apply_border: read_bool(buf, "style.apply_border")?,
        apply_fill: read_bool(buf, "style.apply_fill")?,
        apply_font: read_bool(buf, "style.apply_font")?,
        apply_alignment: read_bool(buf, "style.apply_alignment")?,
    };
    read_end_of_record(buf, "style")?;
    Ok(style)
}

/// Write a data validation record, including its end-of-record marker.
pub fn encode_data_validation(dv: &DataValidation, buf: &mut BytesMut) {
    write_bool(buf, dv.allow_blank);
    write_bool(buf, dv.show_input_message);
    write_bool(buf, dv.show_error_message);
    write_string_opt(buf, dv.error_style.as_deref());
    write_string_opt(buf, dv.error_title.as_deref());
    write_string(buf, &dv.operator);
    write_string_opt(buf, dv.error.as_deref());
    write_string_opt(buf, dv.prompt_title.as_deref());
    write_string_opt(buf, dv.prompt.as_deref());
    write_string(buf, &dv.validation_type);
    write_string(buf, &dv.sqref);
    write_string(buf, &dv.formula1);
    write_string(buf, &dv.formula2);
    write_end_of_record(buf);
}

/// Read a data validation record written by [`encode_data_validation`].
pub fn decode_data_validation(buf: &mut Bytes) -> StoreResult<DataValidation> {
    let dv = DataValidation {
        allow_blank: read_bool(buf, "validation.allow_blank")?,
        show_input_message: read_bool(buf, "validation.show_input_message")?,
        show_error_message: read_bool(buf, "validation.show_error_message")?,
        error_style: read_string_opt(buf, "validation.error_style")?,
        error_title: read_string_opt(buf, "validation.error_title")?,
        operator: read_string(buf, "validation.operator")?,
        error: read_string_opt(buf, "validation.error")?,
        prompt_title: read_string_opt(buf, "validation.prompt_title")?,
        prompt: read_string_opt(buf, "validation.prompt")?,
        validation_type: read_string(buf, "validation.type")?,
        sqref: read_string(buf, "validation.sqref")?,
        formula1: read_string(buf, "validation.formula1")?,
        formula2: read_string(buf, "validation.formula2")?,
    };
    read_end_of_record(buf, "data validation")?;
    Ok(dv)
}

// ============================================================================
// Cell record
// ============================================================================

/// Append the full encoding of `cell` to `buf`.
///
/// The cell's position is not encoded; it is carried by the storage key.
pub fn encode_cell(cell: &Cell, buf: &mut BytesMut) {
    write_string(buf, &cell.value);
    write_string(buf, &cell.formula);
    write_bool(buf, cell.style.is_some());
    write_string(buf, &cell.num_fmt);
    write_bool(buf, cell.date1904);
    write_bool(buf, cell.hidden);
    write_int(buf, cell.h_merge);
    write_int(buf, cell.v_merge);
    write_int(buf, cell.cell_type.as_i64());
    write_bool(buf, cell.data_validation.is_some());
    write_string(buf, &cell.hyperlink.display_string);
    write_string(buf, &cell.hyperlink.link);
    write_string(buf, &cell.hyperlink.tooltip);
    write_int(buf, cell.num);
    write_end_of_record(buf);

    if let Some(style) = &cell.style {
        encode_style(style, buf);
    }
    if let Some(dv) = &cell.data_validation {
        encode_data_validation(dv, buf);
    }
}

/// Decode one cell record, which must span all of `buf`.
///
/// The returned cell has a default position; callers that know the storage
/// key fill it in.
pub fn decode_cell(buf: &mut Bytes) -> StoreResult<Cell> {
    let value = read_string(buf, "value")?;
    let formula = read_string(buf, "formula")?;
    let has_style = read_bool(buf, "has_style")?;
    let num_fmt = read_string(buf, "num_fmt")?;
    let date1904 = read_bool(buf, "date1904")?;
    let hidden = read_bool(buf, "hidden")?;
    let h_merge = read_int(buf, "h_merge")?;
    let v_merge = read_int(buf, "v_merge")?;
    let raw_type = read_int(buf, "cell_type")?;
    let cell_type = CellType::try_from(raw_type)
        .map_err(|e| StoreError::Malformed(e.to_string()))?;
    let has_data_validation = read_bool(buf, "has_data_validation")?;
    let hyperlink = Hyperlink {
        display_string: read_string(buf, "hyperlink.display_string")?,
        link: read_string(buf, "hyperlink.link")?,
        tooltip: read_string(buf, "hyperlink.tooltip")?,
    };
    let num = read_int(buf, "num")?;
    read_end_of_record(buf, "cell")?;

    let style = if has_style {
        Some(decode_style(buf)?)
    } else {
        None
    };
    let data_validation = if has_data_validation {
        Some(decode_data_validation(buf)?)
    } else {
        None
    };

    if !buf.is_empty() {
        return Err(StoreError::Malformed(format!(
            "{} trailing bytes after cell record",
            buf.len()
        )));
    }

    Ok(Cell {
        position: Default::default(),
        value,
        formula,
        style,
        num_fmt,
        date1904,
        hidden,
        h_merge,
        v_merge,
        cell_type,
        data_validation,
        hyperlink,
        num,
    })
}
