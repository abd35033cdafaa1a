//! PDF composition utilities for assembling character sheets.
//!
//! This crate provides low-level PDF manipulation using lopdf:
//! - Deep object copying between documents
//! - Document merging, carrying interactive form fields along
//! - Content and image overlays on existing pages
//! - Plain text page documents
//! - File-level [`LopdfMerger`] and [`LopdfImageOverlayer`] collaborators

mod error;
mod image_overlay;
mod merger;
mod text;

pub use error::ComposerError;
pub use image_overlay::{insert_image, LopdfImageOverlayer};
pub use merger::{merge_files, LopdfMerger};
pub use text::{text_document, TextLine, TextPage};

use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Tracks which source objects already have a copy in the target document.
struct ObjectCopier<'a> {
    source_doc: &'a Document,
    target_doc: &'a mut Document,
    id_map: HashMap<ObjectId, ObjectId>,
}

impl<'a> ObjectCopier<'a> {
    fn new(source_doc: &'a Document, target_doc: &'a mut Document) -> Self {
        Self { source_doc, target_doc, id_map: HashMap::new() }
    }

    /// Copies `source_id` and everything it references into the target.
    ///
    /// The new id is reserved before recursing so reference cycles terminate.
    fn copy_object(&mut self, source_id: ObjectId) -> Result<ObjectId, lopdf::Error> {
        if let Some(target_id) = self.id_map.get(&source_id) {
            return Ok(*target_id);
        }

        let new_id = self.target_doc.add_object(Object::Null);
        self.id_map.insert(source_id, new_id);

        let obj = self.source_doc.get_object(source_id)?.clone();
        let new_obj = self.remap_references(obj)?;
        self.target_doc.objects.insert(new_id, new_obj);

        Ok(new_id)
    }

    /// Copies a page with the attributes it inherits from its source page
    /// tree made explicit, since the copy is detached from that tree.
    fn copy_page(&mut self, page_id: ObjectId) -> Result<ObjectId, lopdf::Error> {
        if let Some(target_id) = self.id_map.get(&page_id) {
            return Ok(*target_id);
        }

        let mut page = self.source_doc.get_object(page_id)?.as_dict()?.clone();
        for key in INHERITABLE_PAGE_KEYS {
            if !page.has(key) {
                if let Some(value) = inherited_attribute(self.source_doc, &page, key) {
                    page.set(key.to_vec(), value);
                }
            }
        }

        let new_id = self.target_doc.add_object(Object::Null);
        self.id_map.insert(page_id, new_id);
        let new_page = self.remap_references(Object::Dictionary(page))?;
        self.target_doc.objects.insert(new_id, new_page);

        Ok(new_id)
    }

    fn remap_references(&mut self, obj: Object) -> Result<Object, lopdf::Error> {
        match obj {
            Object::Reference(id) => Ok(Object::Reference(self.copy_object(id)?)),
            Object::Array(arr) => {
                let new_arr = arr
                    .into_iter()
                    .map(|o| self.remap_references(o))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Object::Array(new_arr))
            }
            Object::Dictionary(dict) => Ok(Object::Dictionary(self.remap_dictionary(dict)?)),
            Object::Stream(mut stream) => {
                stream.dict = self.remap_dictionary(stream.dict)?;
                Ok(Object::Stream(stream))
            }
            _ => Ok(obj),
        }
    }

    /// Page `Parent` links are dropped here; the merge re-points them at the
    /// target page tree. Following them would drag the whole source tree along.
    fn remap_dictionary(&mut self, mut dict: Dictionary) -> Result<Dictionary, lopdf::Error> {
        if is_page(&dict) {
            dict.remove(b"Parent");
        }
        for (_, value) in dict.iter_mut() {
            *value = self.remap_references(value.clone())?;
        }
        Ok(dict)
    }
}

/// Page attributes a page may take from an ancestor `/Pages` node.
const INHERITABLE_PAGE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Page trees deeper than this are treated as cyclic.
const MAX_TREE_DEPTH: usize = 64;

/// The nearest ancestor's value for `key`, walking `/Parent` links.
fn inherited_attribute(doc: &Document, page: &Dictionary, key: &[u8]) -> Option<Object> {
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    for _ in 0..MAX_TREE_DEPTH {
        let node = doc.get_object(parent?).and_then(Object::as_dict).ok()?;
        if let Ok(value) = node.get(key) {
            return Some(value.clone());
        }
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }
    None
}

fn is_page(dict: &Dictionary) -> bool {
    matches!(dict.get(b"Type").and_then(Object::as_name), Ok(name) if name == b"Page")
}

/// Appends every page of `source` to `target`.
///
/// Page objects are deep-copied with their resources and content streams,
/// including resources and boxes inherited from the source page tree.
/// Interactive form fields in the source catalog are copied as well and
/// added to the target's `/AcroForm`, so fillable pages stay fillable.
pub fn merge_documents(target: &mut Document, source: Document) -> Result<(), ComposerError> {
    let source_pages = source.get_pages();
    if source_pages.is_empty() {
        return Ok(());
    }
    let added = source_pages.len() as i64;

    let mut copier = ObjectCopier::new(&source, target);
    // get_pages is a BTreeMap keyed by page number, so this is page order.
    let copied_page_ids = source_pages
        .values()
        .map(|page_id| copier.copy_page(*page_id))
        .collect::<Result<Vec<_>, _>>()?;
    let copied_fields = source_form_fields(&source)
        .into_iter()
        .map(|field_id| copier.copy_object(field_id))
        .collect::<Result<Vec<_>, _>>()?;

    let pages_id = pages_root(target)?;
    let pages_dict = target.get_object_mut(pages_id)?.as_dict_mut()?;
    let existing_kids = pages_dict.get(b"Kids")?.as_array()?.clone();
    let existing_count = pages_dict.get(b"Count")?.as_i64()?;

    let kids: Vec<Object> = existing_kids
        .into_iter()
        .chain(copied_page_ids.iter().map(|id| Object::Reference(*id)))
        .collect();
    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Count", existing_count + added);

    for page_id in copied_page_ids {
        if let Ok(Object::Dictionary(page_dict)) = target.get_object_mut(page_id) {
            page_dict.set("Parent", Object::Reference(pages_id));
        }
    }

    if !copied_fields.is_empty() {
        append_form_fields(target, copied_fields)?;
    }

    Ok(())
}

/// Flags the document's form (if any) so viewers regenerate field appearances.
pub fn set_need_appearances(doc: &mut Document) -> Result<(), ComposerError> {
    let form = match acroform_id(doc)? {
        Some(id) => doc.get_object_mut(id)?.as_dict_mut()?,
        None => match catalog_mut(doc)?.get_mut(b"AcroForm") {
            Ok(inline) => inline.as_dict_mut()?,
            Err(_) => return Ok(()),
        },
    };
    form.set("NeedAppearances", true);
    Ok(())
}

/// Adds a new content stream to an existing page, drawn on top of it.
pub fn overlay_content(
    doc: &mut Document,
    page_id: ObjectId,
    content_stream: Vec<u8>,
) -> Result<(), ComposerError> {
    let stream = Stream::new(dictionary! {}, content_stream);
    let new_content_id = doc.add_object(Object::Stream(stream));

    let page_dict = doc.get_object_mut(page_id)?.as_dict_mut()?;
    let mut contents = match page_dict.get(b"Contents") {
        Ok(Object::Array(arr)) => arr.clone(),
        Ok(single) => vec![single.clone()],
        Err(_) => {
            return Err(ComposerError::Other(format!(
                "Page {:?} is missing a /Contents key.",
                page_id
            )));
        }
    };
    contents.push(Object::Reference(new_content_id));
    page_dict.set("Contents", Object::Array(contents));

    Ok(())
}

fn catalog_id(doc: &Document) -> Result<ObjectId, ComposerError> {
    Ok(doc.trailer.get(b"Root")?.as_reference()?)
}

fn catalog_mut(doc: &mut Document) -> Result<&mut Dictionary, ComposerError> {
    let root_id = catalog_id(doc)?;
    Ok(doc.get_object_mut(root_id)?.as_dict_mut()?)
}

fn pages_root(doc: &Document) -> Result<ObjectId, ComposerError> {
    let root_id = catalog_id(doc)?;
    Ok(doc.get_object(root_id)?.as_dict()?.get(b"Pages")?.as_reference()?)
}

/// The object id of an indirect `/AcroForm`, `None` when absent or inline.
fn acroform_id(doc: &Document) -> Result<Option<ObjectId>, ComposerError> {
    let root_id = catalog_id(doc)?;
    let catalog = doc.get_object(root_id)?.as_dict()?;
    Ok(match catalog.get(b"AcroForm") {
        Ok(Object::Reference(id)) => Some(*id),
        _ => None,
    })
}

fn form_dictionary<'d>(doc: &'d Document) -> Option<&'d Dictionary> {
    let root_id = catalog_id(doc).ok()?;
    let form = doc.get_object(root_id).ok()?.as_dict().ok()?.get(b"AcroForm").ok()?;
    match form {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn source_form_fields(doc: &Document) -> Vec<ObjectId> {
    form_dictionary(doc)
        .and_then(|form| form.get(b"Fields").ok())
        .and_then(|fields| fields.as_array().ok())
        .map(|fields| fields.iter().filter_map(|f| f.as_reference().ok()).collect())
        .unwrap_or_default()
}

fn append_form_fields(doc: &mut Document, fields: Vec<ObjectId>) -> Result<(), ComposerError> {
    let form_id = match acroform_id(doc)? {
        Some(id) => id,
        None => {
            let existing = form_dictionary(doc).cloned();
            let form = existing.unwrap_or_else(|| dictionary! { "Fields" => Vec::<Object>::new() });
            let id = doc.add_object(form);
            catalog_mut(doc)?.set("AcroForm", Object::Reference(id));
            id
        }
    };
    let form = doc.get_object_mut(form_id)?.as_dict_mut()?;
    let mut all_fields = form
        .get(b"Fields")
        .and_then(Object::as_array)
        .cloned()
        .unwrap_or_default();
    all_fields.extend(fields.into_iter().map(Object::Reference));
    form.set("Fields", Object::Array(all_fields));
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::StringFormat;

    #[test]
    fn merge_appends_pages_in_order() {
        let mut target = pages(&["Character", "Personality"]);
        let source = pages(&["Features 1", "Features 2", "Features 3"]);

        merge_documents(&mut target, source).unwrap();

        assert_eq!(target.get_pages().len(), 5);
        assert!(page_text(&target, 1).contains("Character"));
        assert!(page_text(&target, 3).contains("Features 1"));
        assert!(page_text(&target, 5).contains("Features 3"));
    }

    #[test]
    fn inherited_page_attributes_survive_the_merge() {
        let mut target = pages(&["Character"]);
        // Move the box and resources of the source page up onto its Pages node.
        let mut source = pages(&["Form"]);
        let page_id = *source.get_pages().get(&1).unwrap();
        let page = source.get_object_mut(page_id).unwrap().as_dict_mut().unwrap();
        let media_box = page.remove(b"MediaBox").unwrap();
        let resources = page.remove(b"Resources").unwrap();
        let source_root = pages_root(&source).unwrap();
        let node = source.get_object_mut(source_root).unwrap().as_dict_mut().unwrap();
        node.set("MediaBox", media_box.clone());
        node.set("Resources", resources);

        merge_documents(&mut target, source).unwrap();

        let merged_id = *target.get_pages().get(&2).unwrap();
        let merged = target.get_object(merged_id).unwrap().as_dict().unwrap();
        assert_eq!(merged.get(b"MediaBox").unwrap(), &media_box);
        let fonts = target.get_page_fonts(merged_id).unwrap();
        assert!(fonts.contains_key(b"F1".as_slice()));
        assert!(page_text(&target, 2).contains("Form"));
    }

    #[test]
    fn merged_pages_point_at_target_tree() {
        let mut target = pages(&["A"]);
        merge_documents(&mut target, pages(&["B"])).unwrap();

        let pages_id = pages_root(&target).unwrap();
        for page_id in target.get_pages().values() {
            let parent = target
                .get_object(*page_id)
                .unwrap()
                .as_dict()
                .unwrap()
                .get(b"Parent")
                .unwrap()
                .as_reference()
                .unwrap();
            assert_eq!(parent, pages_id);
        }
    }

    #[test]
    fn merge_of_empty_source_is_noop() {
        let mut target = pages(&["A"]);
        let empty = text_document(&[]).unwrap();
        merge_documents(&mut target, empty).unwrap();
        assert_eq!(target.get_pages().len(), 1);
    }

    #[test]
    fn merge_carries_form_fields() {
        let mut target = with_form_field(pages(&["Character"]), "CharacterName");
        let source = with_form_field(pages(&["Personality"]), "Ideals");

        merge_documents(&mut target, source).unwrap();
        set_need_appearances(&mut target).unwrap();

        let form = form_dictionary(&target).unwrap();
        assert_eq!(form.get(b"Fields").unwrap().as_array().unwrap().len(), 2);
        assert!(form.get(b"NeedAppearances").unwrap().as_bool().unwrap());
    }

    #[test]
    fn overlay_adds_a_content_stream() {
        let mut doc = pages(&["Original Content"]);
        let page_id = *doc.get_pages().get(&1).unwrap();

        let overlay_stream = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![100.into(), 100.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::String(b"Overlay Content".to_vec(), StringFormat::Literal)],
                ),
                Operation::new("ET", vec![]),
            ],
        }
        .encode()
        .unwrap();

        overlay_content(&mut doc, page_id, overlay_stream).unwrap();

        let page_dict = doc.get_object(page_id).unwrap().as_dict().unwrap();
        let contents = page_dict.get(b"Contents").unwrap().as_array().unwrap();
        assert_eq!(contents.len(), 2);
        let text = page_text(&doc, 1);
        assert!(text.contains("Original Content"));
        assert!(text.contains("Overlay Content"));
    }
}
