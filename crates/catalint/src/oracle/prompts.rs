//! Prompt templates for oracle interactions.

use super::provider::OracleRequest;

fn optional_line(label: &str, value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => format!("- {}: {}\n", label, v.trim()),
        _ => String::new(),
    }
}

/// Build a prompt for misplaced-artist detection.
pub fn detect_artist_prompt(request: &OracleRequest) -> String {
    format!(
        r#"Analyze this auction listing title and decide whether it contains the name of
an artist or designer that belongs in the separate artist field.

## Listing
- Title: {}
{}{}{}
## Task
Only report a name if you are confident it is a person who made the object.
Manufacturers (Orrefors, Gustavsberg), places and people depicted as the
subject (e.g. "Gustav Vasa") are NOT artists.

Respond with a JSON object:
{{
  "hasArtist": true or false,
  "artistName": "Full Name" or null,
  "confidence": 0.0-1.0,
  "reasoning": "One sentence",
  "suggestedTitle": "The title with the name removed" or null
}}"#,
        request.title.trim(),
        optional_line("Object type", request.object_type.as_deref()),
        optional_line("Artist field", request.artist_field.as_deref()),
        optional_line("Description", request.description.as_deref()),
    )
}

/// Build a prompt for spellchecking catalog text.
pub fn spellcheck_prompt(request: &OracleRequest) -> String {
    let field = request
        .field_type
        .map(|f| f.label())
        .unwrap_or("text");
    let context = if request.title.trim().is_empty() {
        String::new()
    } else {
        format!("\n## Listing title (context only, do not check)\n{}\n", request.title.trim())
    };
    let whitelist = if request.whitelist.is_empty() {
        "None".to_string()
    } else {
        request.whitelist.join(", ")
    };

    format!(
        r#"Find spelling mistakes in this Swedish auction catalog {field}.

## Text
{}
{context}
## Known-correct terms
These domain terms are spelled correctly and must never be reported:
{whitelist}

## Task
Report only clear misspellings of Swedish words or well-known brand names.
Do not report names of people, places, abbreviations or measurements.
Do not change diacritics on names.

Respond with a JSON object:
{{
  "issues": [
    {{"original": "misspelled word", "corrected": "correct word", "confidence": 0.0-1.0}}
  ]
}}"#,
        request.text.as_deref().unwrap_or("").trim(),
    )
}

/// Build a prompt for artist verification.
pub fn verify_artist_prompt(request: &OracleRequest) -> String {
    format!(
        r#"Is the following a real, documented artist or designer?

## Artist
{}

## Listing title
{}

## Task
Answer only if you recognise the person. Keep the biography to two sentences.

Respond with a JSON object:
{{
  "isVerified": true or false,
  "biography": "Short biography" or null
}}"#,
        request.artist_field.as_deref().unwrap_or("").trim(),
        request.title.trim(),
    )
}

/// System prompt for all oracle interactions.
pub fn system_prompt() -> &'static str {
    r#"You are an expert cataloguer at a Swedish auction house.

Your role is to:
1. Spot artist or designer names typed into the wrong listing field
2. Find spelling mistakes in Swedish catalog descriptions

Guidelines:
- Be conservative: a missed suggestion is better than a wrong one
- Titles usually start with an ALL-CAPS object type (VAS, TAVLA, FAT)
- Manufacturers and places are not artists
- Always respond with valid JSON when requested"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spellcheck::FieldType;

    #[test]
    fn test_detect_prompt_includes_context() {
        let request = OracleRequest::detect_artist("TAVLA, Carl Larsson, akvarell")
            .with_object_type("TAVLA")
            .with_description("Signerad nere till höger");

        let prompt = detect_artist_prompt(&request);

        assert!(prompt.contains("TAVLA, Carl Larsson, akvarell"));
        assert!(prompt.contains("- Object type: TAVLA"));
        assert!(prompt.contains("Signerad nere till höger"));
        assert!(!prompt.contains("Artist field"));
    }

    #[test]
    fn test_spellcheck_prompt_embeds_whitelist() {
        let request = OracleRequest::spellcheck("Vas i porsling", FieldType::Description, "VAS")
            .with_whitelist(vec!["stengods".to_string(), "fajans".to_string()]);

        let prompt = spellcheck_prompt(&request);

        assert!(prompt.contains("catalog description"));
        assert!(prompt.contains("Vas i porsling"));
        assert!(prompt.contains("stengods, fajans"));
        assert!(prompt.contains("context only"));
    }
}
