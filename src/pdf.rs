//! Bundling rendered pages into a single PDF.
//!
//! Every page becomes one full-bleed image, so the PDF looks exactly like the
//! PNG output. Pages with any translucent pixel carry their alpha channel as a
//! soft mask.

use crate::colour::Colour;
use crate::error::{ConfigurationError, HandwriteError};
use crate::refs::{ObjectReferences, RefType};
use crate::render::RenderedPage;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Content, Date as PDate, Filter, Finish, Name, Pdf, Rect, TextStr};
use std::io::Write;

/// Points per inch in PDF user space
const POINTS_PER_INCH: f32 = 72.0;

/// Document metadata written into the PDF info dictionary
#[derive(Default, Debug, Clone)]
pub struct Info {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Info {
    pub fn new() -> Info {
        Info::default()
    }

    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author.as_str()));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));

        use chrono::prelude::*;
        let now = Local::now();
        let offset = now.offset().fix();
        let offset_hours = offset.local_minus_utc() / (60 * 60);
        let offset_minutes = ((offset.local_minus_utc() - (offset_hours * (60 * 60))) / 60).abs();
        let date = PDate::new(now.year() as u16)
            .month(now.month() as u8)
            .day(now.day() as u8)
            .hour(now.hour() as u8)
            .minute(now.minute() as u8)
            .second(now.second() as u8)
            .utc_offset_hour(offset_hours as i8)
            .utc_offset_minute(offset_minutes as u8);
        info.creation_date(date);
    }
}

/// Write the pages as a PDF, one image per page, in the order given.
///
/// `dpi` sets the physical page size: a page `w` pixels wide becomes
/// `w * 72 / dpi` points wide. For supersampled renders use `rate * 96` or so to
/// get a page of the nominal size. Like the PNG path, the whole document is
/// assembled in memory before it is written.
pub fn write_pdf<W: Write>(
    pages: &[RenderedPage],
    dpi: f32,
    info: Option<&Info>,
    mut w: W,
) -> Result<(), HandwriteError> {
    if !(dpi.is_finite() && dpi > 0.0) {
        return Err(ConfigurationError::NotPositive {
            field: "dpi",
            value: dpi,
        }
        .into());
    }

    let mut refs = ObjectReferences::new();
    let catalog_id = refs.gen(RefType::Catalog);
    let page_tree_id = refs.gen(RefType::PageTree);

    let mut writer = Pdf::new();
    if let Some(info) = info {
        info.write(&mut refs, &mut writer);
    }

    let page_refs: Vec<_> = (0..pages.len())
        .map(|i| refs.gen(RefType::Page(i)))
        .collect();
    writer
        .pages(page_tree_id)
        .count(page_refs.len() as i32)
        .kids(page_refs);

    for (i, page) in pages.iter().enumerate() {
        write_page(&mut refs, i, page, dpi, &mut writer);
    }

    let mut catalog = writer.catalog(catalog_id);
    catalog.pages(page_tree_id);
    catalog.finish();

    log::debug!("wrote {} pages to pdf", pages.len());
    w.write_all(writer.finish().as_slice()).map_err(Into::into)
}

fn write_page(
    refs: &mut ObjectReferences,
    index: usize,
    page: &RenderedPage,
    dpi: f32,
    writer: &mut Pdf,
) {
    let (width, height) = page.image.dimensions();
    let scale = POINTS_PER_INCH / dpi;
    let (page_width, page_height) = (width as f32 * scale, height as f32 * scale);

    let image_id = refs.gen(RefType::Image(index));
    let level = CompressionLevel::DefaultLevel as u8;

    let raw = page.image.as_raw();
    let colour: Vec<u8> = raw
        .chunks_exact(4)
        .flat_map(|p| &p[..3])
        .copied()
        .collect();
    let colour = compress_to_vec_zlib(&colour, level);

    // opaque pages need no soft mask
    let translucent = page
        .image
        .pixels()
        .any(|p| Colour::from(p.0).is_translucent());
    let mask = translucent.then(|| {
        let alpha: Vec<u8> = raw.chunks_exact(4).map(|p| p[3]).collect();
        (refs.gen(RefType::ImageMask(index)), compress_to_vec_zlib(&alpha, level))
    });

    let mut image = writer.image_xobject(image_id, colour.as_slice());
    image.filter(Filter::FlateDecode);
    image.width(width as i32);
    image.height(height as i32);
    image.color_space().device_rgb();
    image.bits_per_component(8);
    if let Some((mask_id, _)) = &mask {
        image.s_mask(*mask_id);
    }
    image.finish();

    if let Some((mask_id, alpha)) = &mask {
        let mut s_mask = writer.image_xobject(*mask_id, alpha.as_slice());
        s_mask.filter(Filter::FlateDecode);
        s_mask.width(width as i32);
        s_mask.height(height as i32);
        s_mask.color_space().device_gray();
        s_mask.bits_per_component(8);
        s_mask.finish();
    }

    let content_id = refs.gen(RefType::ContentForPage(index));
    let page_id = refs.gen(RefType::Page(index));
    let page_tree_id = refs.gen(RefType::PageTree);

    let mut pdf_page = writer.page(page_id);
    pdf_page.media_box(Rect::new(0.0, 0.0, page_width, page_height));
    pdf_page.parent(page_tree_id);
    pdf_page
        .resources()
        .x_objects()
        .pair(Name(b"I0"), image_id);
    pdf_page.contents(content_id);
    pdf_page.finish();

    let mut content = Content::new();
    content.save_state();
    content.transform([page_width, 0.0, 0.0, page_height, 0.0, 0.0]);
    content.x_object(Name(b"I0"));
    content.restore_state();
    writer.stream(content_id, &content.finish());
}
