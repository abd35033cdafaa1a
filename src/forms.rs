//! The primary pages: character, personality and spell sheets.

use crate::error::SheetError;
use itertools::Itertools;
use lopdf::Document;
use log::debug;
use sheetwright_content::{spell_level_label, AbilityScores, Character, Spell};
use sheetwright_pdf_composer::{text_document, ComposerError, TextLine, TextPage};
use std::ffi::OsString;
use std::fmt::Debug;
use std::fs::File;
use std::path::{Path, PathBuf};

const WRAP_WIDTH: usize = 95;

/// Appends `suffix` to the final path component, keeping any dots already
/// in it (`with_suffix("v1.2", "_char")` is `v1.2_char`).
pub(crate) fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// `<basename>.pdf`.
pub(crate) fn pdf_file(basename: &Path) -> PathBuf {
    with_suffix(basename, ".pdf")
}

/// Produces the primary page files for a character.
pub trait FormFiller: Send + Sync + Debug {
    /// Each method writes one file per page: `<basename>.pdf`, then
    /// `<basename>_2.pdf` and so on as the content overflows.
    fn character_pages(&self, character: &Character, basename: &Path) -> Result<Vec<PathBuf>, SheetError>;

    fn personality_pages(&self, character: &Character, basename: &Path) -> Result<Vec<PathBuf>, SheetError>;

    fn spell_pages(&self, character: &Character, basename: &Path) -> Result<Vec<PathBuf>, SheetError>;
}

/// Greedy word wrap. Words longer than `width` get a line to themselves.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if !line.is_empty() && line.len() + 1 + word.len() > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    lines
}

fn optional(value: Option<impl ToString>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn field(label: &str, value: impl AsRef<str>) -> TextLine {
    TextLine::plain(format!("{label}: {}", value.as_ref()))
}

fn save(pages: &[TextPage], path: &Path) -> Result<(), SheetError> {
    let mut doc: Document = text_document(pages)?;
    doc.save_to(&mut File::create(path)?)
        .map_err(ComposerError::from)?;
    debug!("Wrote {} page(s) to {}", pages.len(), path.display());
    Ok(())
}

fn character_lines(character: &Character) -> Vec<TextLine> {
    let mut lines = vec![
        field("Name", &character.name),
        field("Player", optional(character.player_name.as_deref())),
        field("Class & level", character.class_summary()),
        field("Race", optional(character.race.as_ref().map(|r| r.name.clone()))),
        field("Background", optional(character.background.as_ref().map(|b| b.name.clone()))),
        field("Alignment", optional(character.alignment.as_deref())),
        field("Hit points", optional(character.hit_points)),
        field("Armor class", optional(character.armor_class)),
        field("Speed", optional(character.speed)),
        TextLine::heading("Abilities"),
    ];
    lines.extend(character.abilities.labelled().iter().map(|(label, score)| {
        TextLine::plain(format!("{label} {score} ({:+})", AbilityScores::modifier(*score)))
    }));
    let features = character.applicable_features();
    if !features.is_empty() {
        lines.push(TextLine::heading("Features & Traits"));
        lines.extend(features.iter().map(|f| TextLine::plain(format!("{} ({})", f.name, f.source))));
    }
    lines
}

fn personality_lines(character: &Character) -> Vec<TextLine> {
    let personality = &character.personality;
    let mut lines = Vec::new();
    for (heading, text) in [
        ("Personality Traits", &personality.traits),
        ("Ideals", &personality.ideals),
        ("Bonds", &personality.bonds),
        ("Flaws", &personality.flaws),
        ("Backstory", &personality.backstory),
    ] {
        lines.push(TextLine::heading(heading));
        lines.extend(wrap(text, WRAP_WIDTH).into_iter().map(TextLine::plain));
    }
    lines
}

fn spell_line(spell: &Spell) -> TextLine {
    let mut tags = Vec::new();
    if spell.concentration {
        tags.push("C");
    }
    if spell.ritual {
        tags.push("R");
    }
    let tags = if tags.is_empty() { String::new() } else { format!(" [{}]", tags.join(",")) };
    TextLine::plain(format!(
        "{}{} - {}, {}, {}",
        spell.name, tags, spell.casting_time, spell.range, spell.duration
    ))
}

fn spell_lines(character: &Character) -> Vec<TextLine> {
    let mut lines: Vec<TextLine> = character
        .classes
        .iter()
        .filter(|c| c.class.casts_spells_at(c.level))
        .filter_map(|c| c.class.spellcasting.as_ref().map(|(_, ability)| (c, ability)))
        .map(|(c, ability)| field(&format!("{} spellcasting ability", c.class.name), ability))
        .collect();

    for (level, spells) in &character
        .spells
        .iter()
        .sorted_by_key(|s| (s.level, s.name.to_lowercase()))
        .chunk_by(|s| s.level)
    {
        let heading = if level == 0 {
            "Cantrips".to_string()
        } else {
            format!("{} Level", spell_level_label(level))
        };
        lines.push(TextLine::heading(heading));
        lines.extend(spells.map(spell_line));
    }
    lines
}

/// Splits lines into pages, never starting a page with a dangling heading
/// from the previous one.
fn paginate(title: &str, lines: Vec<TextLine>) -> Vec<TextPage> {
    let capacity = TextPage::capacity().max(2);
    let mut pages = vec![TextPage::new(title)];
    for line in lines {
        let current = pages.len() - 1;
        if pages[current].lines.len() >= capacity {
            let carried = match pages[current].lines.last() {
                Some(last) if last.bold => pages[current].lines.pop(),
                _ => None,
            };
            let mut next = TextPage::new(format!("{title} (continued)"));
            next.lines.extend(carried);
            pages.push(next);
        }
        if let Some(page) = pages.last_mut() {
            page.lines.push(line);
        }
    }
    pages
}

/// [`FormFiller`] that writes plain text pages with lopdf.
#[derive(Debug, Clone, Default)]
pub struct LopdfFormFiller;

/// Writes `lines` under `title`, one file per page.
fn write_pages(title: &str, lines: Vec<TextLine>, basename: &Path) -> Result<Vec<PathBuf>, SheetError> {
    paginate(title, lines)
        .into_iter()
        .enumerate()
        .map(|(i, page)| {
            let path = if i == 0 {
                pdf_file(basename)
            } else {
                pdf_file(&with_suffix(basename, &format!("_{}", i + 1)))
            };
            save(&[page], &path)?;
            Ok(path)
        })
        .collect()
}

impl FormFiller for LopdfFormFiller {
    fn character_pages(&self, character: &Character, basename: &Path) -> Result<Vec<PathBuf>, SheetError> {
        write_pages(&character.name, character_lines(character), basename)
    }

    fn personality_pages(&self, character: &Character, basename: &Path) -> Result<Vec<PathBuf>, SheetError> {
        let title = format!("{}: Personality", character.name);
        write_pages(&title, personality_lines(character), basename)
    }

    fn spell_pages(&self, character: &Character, basename: &Path) -> Result<Vec<PathBuf>, SheetError> {
        let title = format!("{}: Spells", character.name);
        write_pages(&title, spell_lines(character), basename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetwright_content::{ContentLibrary, RawCharacter, RawClassLevel};
    use tempfile::tempdir;

    fn wizard(spell_count: usize) -> Character {
        let raw = RawCharacter {
            name: "Merric".to_string(),
            classes: vec![RawClassLevel { name: "Wizard".into(), level: 5, subclass: None }],
            spells: (0..spell_count)
                .map(|i| Spell { name: format!("Spell {i:03}"), level: (i % 4) as u8, ..Default::default() })
                .collect(),
            ..Default::default()
        };
        Character::load(&raw, &ContentLibrary::standard().unwrap()).unwrap()
    }

    fn page_count(path: &Path) -> usize {
        Document::load_from(File::open(path).unwrap()).unwrap().get_pages().len()
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap("", 10), Vec::<String>::new());
    }

    #[test]
    fn pdf_file_keeps_dots() {
        assert_eq!(pdf_file(Path::new("out/v1.2_char")), PathBuf::from("out/v1.2_char.pdf"));
    }

    fn page_text(path: &Path) -> String {
        let doc = Document::load_from(File::open(path).unwrap()).unwrap();
        let page_id = *doc.get_pages().get(&1).unwrap();
        String::from_utf8_lossy(&doc.get_page_content(page_id).unwrap()).into_owned()
    }

    #[test]
    fn character_and_personality_pages() {
        let dir = tempdir().unwrap();
        let character = wizard(0);
        let filler = LopdfFormFiller;

        let char_pdfs = filler.character_pages(&character, &dir.path().join("merric_char")).unwrap();
        assert_eq!(char_pdfs, vec![dir.path().join("merric_char.pdf")]);
        assert_eq!(page_count(&char_pdfs[0]), 1);

        let person_pdfs = filler
            .personality_pages(&character, &dir.path().join("merric_person"))
            .unwrap();
        assert_eq!(person_pdfs.len(), 1);
        assert_eq!(page_count(&person_pdfs[0]), 1);
    }

    #[test]
    fn long_backstory_continues_on_numbered_pages() {
        let dir = tempdir().unwrap();
        let mut character = wizard(0);
        character.personality.backstory =
            (0..120).map(|i| format!("Sentence number {i}.")).collect::<Vec<_>>().join("\n");

        let basename = dir.path().join("merric_person");
        let pdfs = LopdfFormFiller.personality_pages(&character, &basename).unwrap();

        assert!(pdfs.len() >= 3);
        assert_eq!(pdfs[1], dir.path().join("merric_person_2.pdf"));
        assert!(page_text(&pdfs[0]).contains("Sentence number 0."));
        assert!(page_text(pdfs.last().unwrap()).contains("Sentence number 119."));
        let total: usize = pdfs.iter().map(|p| page_text(p).matches("Sentence number").count()).sum();
        assert_eq!(total, 120);
    }

    #[test]
    fn spells_overflow_into_numbered_files() {
        let dir = tempdir().unwrap();
        let basename = dir.path().join("merric_spells");
        let filler = LopdfFormFiller;

        let single = filler.spell_pages(&wizard(5), &basename).unwrap();
        assert_eq!(single, vec![dir.path().join("merric_spells.pdf")]);

        let many = filler.spell_pages(&wizard(TextPage::capacity() * 2), &basename).unwrap();
        assert!(many.len() >= 3);
        assert_eq!(many[1], dir.path().join("merric_spells_2.pdf"));
        for path in &many {
            assert_eq!(page_count(path), 1);
        }
    }

    #[test]
    fn paginate_carries_trailing_heading() {
        let capacity = TextPage::capacity();
        let mut lines: Vec<TextLine> = (0..capacity - 1).map(|i| TextLine::plain(i.to_string())).collect();
        lines.push(TextLine::heading("2nd Level"));
        lines.push(TextLine::plain("Misty Step"));

        let pages = paginate("Spells", lines);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines.len(), capacity - 1);
        assert_eq!(pages[1].lines[0], TextLine::heading("2nd Level"));
        assert_eq!(pages[1].title, "Spells (continued)");
    }
}
