
use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Passes of the cleanup loop. Markup nests, so each pass peels one more
/// layer; three are enough for article text.
const MAX_PASSES: usize = 3;

lazy_static! {
  static ref ENTITY_RE: Regex = Regex::new(r"&(#?)([xX]?)(\w{1,8});").unwrap();
  // Interlanguage links at the very end of a page
  static ref LANGUAGE_LINKS_RE: Regex = Regex::new(r"(\n\[\[[a-z][a-z][\w-]*:[^:\]]+\]\])+$").unwrap();
  static ref FILE_RE: Regex = Regex::new(r"\[\[([fF]ile:|[iI]mage)[^\]]*(\]\])").unwrap();

  static ref COMMENT_RE: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
  static ref REF_RE: Regex = Regex::new(r"(?s)<ref([> ].*?)(</ref>|/>)").unwrap();
  static ref NOWIKI_RE: Regex = Regex::new(r"(?s)<nowiki([> ].*?)(</nowiki>|/>)").unwrap();
  static ref MATH_RE: Regex = Regex::new(r"(?s)<math([> ].*?)(</math>|/>)").unwrap();
  static ref TAG_RE: Regex = Regex::new(r"(?s)<(.*?)>").unwrap();
  static ref CATEGORY_RE: Regex = Regex::new(r"\[\[Category:[^\]\[]*\]\]").unwrap();
  static ref URL_RE: Regex = Regex::new(r"\[(\w+)://(.*?)(( (.*?))|())\]").unwrap();
  static ref PIPED_LINK_RE: Regex = Regex::new(r"(?s)\[([^\]\[]*)\|([^\]\[]*)\]").unwrap();
  // `{|`, `|}` and `|-` rows (not `|-1`), up to and including the newline
  static ref TABLE_LINE_RE: Regex = Regex::new(r"(?:\{\||\|\})[^\n]*\n|\|-(?:[^\d\n][^\n]*)?\n").unwrap();
  // Cell openers with their attribute runs; group 1 is the context they follow
  static ref TABLE_CELL_RE: Regex = Regex::new(r"(\n |\n\n| {2}|[^\n]\n|[^\n]\t)(?:\||!)(?:[^\[\]\n]*?\|)*").unwrap();
  static ref TABLE_FORMAT_RE: Regex = Regex::new(concat!(
    r"(\n.{0,4}((bgcolor)|(\d{0,1}[ ]?colspan)|(rowspan)|(style=)|(class=)|(align=)|(scope=))(.*))|",
    r"(^.{0,2}((bgcolor)|(\d{0,1}[ ]?colspan)|(rowspan)|(style=)|(class=)|(align=))(.*))"
  )).unwrap();
}

fn named_entity(name: &str) -> Option<char> {
  Some(match name {
    "amp" => '&',
    "lt" => '<',
    "gt" => '>',
    "quot" => '"',
    "apos" => '\'',
    "nbsp" => '\u{a0}',
    "ndash" => '–',
    "mdash" => '—',
    _ => return None,
  })
}

/// Decodes decimal, hex and the common named entities. Anything that does
/// not decode is left as written.
pub fn decode_entities(text: &str) -> String {
  ENTITY_RE.replace_all(text, |caps: &Captures| {
    let body = &caps[3];
    let decoded = match (&caps[1], &caps[2]) {
      ("#", "") => body.parse::<u32>().ok().and_then(char::from_u32),
      ("#", _) => u32::from_str_radix(body, 16).ok().and_then(char::from_u32),
      _ => named_entity(body),
    };
    match decoded {
      Some(c) => c.to_string(),
      None => caps[0].to_string(),
    }
  }).into_owned()
}

/// Drops `{{...}}` templates, nested ones included. An unclosed template
/// swallows the rest of the text.
pub fn remove_templates(s: &str) -> String {
  let mut res = String::with_capacity(s.len());
  let mut kept_from = 0;
  let mut braces: Option<(usize, usize)> = None;
  let mut prev: Option<char> = None;

  for (i, c) in s.char_indices() {
    if braces.is_none() && c == '{' && prev == Some('{') {
      res.push_str(&s[kept_from..i - 1]);
      braces = Some((1, 0));
    }
    let balanced = match &mut braces {
      Some((open, close)) => {
        match c {
          '{' => *open += 1,
          '}' => *close += 1,
          _ => {}
        }
        *open == *close
      }
      None => false,
    };
    if balanced {
      braces = None;
      kept_from = i + 1;
    }
    prev = Some(c);
  }

  if braces.is_none() {
    res.push_str(&s[kept_from..]);
  }
  res
}

/// Replaces `[[File:...]]` and `[[Image:...]]` with their caption, the last
/// `|` field.
pub fn remove_files(s: &str) -> String {
  FILE_RE.replace_all(s, |caps: &Captures| {
    let m = &caps[0];
    m[..m.len() - 2].rsplit('|').next().unwrap_or("").to_string()
  }).into_owned()
}

fn strip_pass(text: &str) -> String {
  let text = COMMENT_RE.replace_all(text, "");
  let text = REF_RE.replace_all(&text, "");
  let text = NOWIKI_RE.replace_all(&text, "");
  let text = MATH_RE.replace_all(&text, "");
  let text = TAG_RE.replace_all(&text, "");
  let text = CATEGORY_RE.replace_all(&text, "");
  let text = URL_RE.replace_all(&text, "${3}");
  let text = PIPED_LINK_RE.replace_all(&text, "${2}");

  let text = text.replace("!!", "\n|").replace("|-||", "\n|");
  let text = TABLE_LINE_RE.replace_all(&text, "\n\n");
  let text = text.replace("|||", "|\n|").replace("||", "\n|");
  let text = TABLE_CELL_RE.replace_all(&text, "${1}\n");
  let text = TABLE_FORMAT_RE.replace_all(&text, "\n");

  text.replace("[]", "")
}

/// Reduces article wikitext to its running prose: entities decoded,
/// templates, comments, references, tags, categories and table markup
/// dropped, links and file captions reduced to their visible text.
pub fn strip_markup(raw: &str) -> String {
  let text = decode_entities(raw);
  let text = LANGUAGE_LINKS_RE.replace_all(&text, "");
  let text = remove_templates(&text);
  let mut text = remove_files(&text);

  for _ in 0..MAX_PASSES {
    let next = strip_pass(&text);
    if next == text {
      break;
    }
    text = next;
  }

  text.replace(['[', ']'], "")
}
