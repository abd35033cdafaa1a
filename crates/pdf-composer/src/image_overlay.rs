//! Drawing raster images onto existing pages.

use crate::{overlay_content, ComposerError};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use log::debug;
use sheetwright_traits::{ImageOverlayer, ImagePlacement, PdfError};
use std::fs::File;
use std::path::Path;

/// Embeds the image at `placement.path` as an XObject and draws it on the
/// requested page. The document is rewritten in place.
pub fn insert_image(pdf: &Path, placement: &ImagePlacement) -> Result<(), ComposerError> {
    let mut doc = Document::load_from(File::open(pdf)?)?;
    let page_id = *doc.get_pages().get(&placement.page).ok_or_else(|| {
        ComposerError::Other(format!(
            "{} has no page {} to place {} on",
            pdf.display(),
            placement.page,
            placement.path.display()
        ))
    })?;

    let image = image::open(&placement.path)?.to_rgb8();
    let (width, height) = image.dimensions();
    let xobject_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        image.into_raw(),
    ));
    let name = format!("SwImg{}", xobject_id.0);
    register_xobject(&mut doc, page_id, &name, xobject_id)?;

    let ops = format!(
        "q {} 0 0 {} {} {} cm /{} Do Q",
        placement.width, placement.height, placement.x, placement.y, name
    );
    overlay_content(&mut doc, page_id, ops.into_bytes())?;
    debug!("Placed {} on page {} of {}", placement.path.display(), placement.page, pdf.display());

    doc.save_to(&mut File::create(pdf)?)?;
    Ok(())
}

/// Returns the id of the indirect dictionary stored under `key` in the
/// object `owner`, if it is indirect.
fn indirect_entry(doc: &Document, owner: ObjectId, key: &[u8]) -> Result<Option<ObjectId>, ComposerError> {
    let dict = doc.get_object(owner)?.as_dict()?;
    Ok(match dict.get(key) {
        Ok(Object::Reference(id)) => Some(*id),
        _ => None,
    })
}

/// Resources may be inherited inline or shared by reference; an indirect
/// dictionary is promoted so the new entry lands somewhere we can address.
fn resources_id(doc: &mut Document, page_id: ObjectId) -> Result<ObjectId, ComposerError> {
    if let Some(id) = indirect_entry(doc, page_id, b"Resources")? {
        return Ok(id);
    }
    let inline = doc
        .get_object(page_id)?
        .as_dict()?
        .get(b"Resources")
        .and_then(Object::as_dict)
        .cloned()
        .unwrap_or_else(|_| Dictionary::new());
    let id = doc.add_object(inline);
    doc.get_object_mut(page_id)?
        .as_dict_mut()?
        .set("Resources", Object::Reference(id));
    Ok(id)
}

fn register_xobject(
    doc: &mut Document,
    page_id: ObjectId,
    name: &str,
    xobject_id: ObjectId,
) -> Result<(), ComposerError> {
    let resources = resources_id(doc, page_id)?;
    let target = match indirect_entry(doc, resources, b"XObject")? {
        Some(id) => doc.get_object_mut(id)?.as_dict_mut()?,
        None => {
            let resources_dict = doc.get_object_mut(resources)?.as_dict_mut()?;
            if !resources_dict.has(b"XObject") {
                resources_dict.set("XObject", Dictionary::new());
            }
            resources_dict.get_mut(b"XObject")?.as_dict_mut()?
        }
    };
    target.set(name, Object::Reference(xobject_id));
    Ok(())
}

/// [`ImageOverlayer`] backed by lopdf and the `image` decoders.
#[derive(Debug, Clone, Default)]
pub struct LopdfImageOverlayer;

impl ImageOverlayer for LopdfImageOverlayer {
    fn insert_image(&self, pdf: &Path, placement: &ImagePlacement) -> Result<(), PdfError> {
        insert_image(pdf, placement).map_err(|e| match e {
            ComposerError::Io(io) => PdfError::Io(io),
            other => PdfError::Failed {
                path: pdf.to_path_buf(),
                message: other.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::pages;
    use image::{Rgb, RgbImage};
    use std::path::PathBuf;

    fn fixture(dir: &Path) -> (PathBuf, PathBuf) {
        let pdf = dir.join("sheet.pdf");
        pages(&["Character", "Features"])
            .save_to(&mut File::create(&pdf).unwrap())
            .unwrap();
        let png = dir.join("portrait.png");
        RgbImage::from_pixel(4, 3, Rgb([200, 10, 10])).save(&png).unwrap();
        (pdf, png)
    }

    #[test]
    fn image_is_drawn_on_requested_page() {
        let dir = tempfile::tempdir().unwrap();
        let (pdf, png) = fixture(dir.path());
        let placement = ImagePlacement { path: png, page: 2, x: 400.0, y: 600.0, width: 120.0, height: 90.0 };

        LopdfImageOverlayer.insert_image(&pdf, &placement).unwrap();

        let doc = Document::load_from(File::open(&pdf).unwrap()).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
        let page_id = *doc.get_pages().get(&2).unwrap();
        let content = String::from_utf8_lossy(&doc.get_page_content(page_id).unwrap()).into_owned();
        assert!(content.contains("Do"));
        assert!(content.contains("SwImg"));
    }

    #[test]
    fn missing_page_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let (pdf, png) = fixture(dir.path());
        let placement = ImagePlacement { path: png, page: 9, x: 0.0, y: 0.0, width: 10.0, height: 10.0 };

        let err = LopdfImageOverlayer.insert_image(&pdf, &placement).unwrap_err();
        assert!(matches!(err, PdfError::Failed { .. }));
    }
}
