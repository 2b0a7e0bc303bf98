//! Fixed page content: the three technology records and their code samples.
//!
//! Everything here is constant for the lifetime of the page. The only
//! relationship is `Technology::id` indexing into the sample lookup.

use crate::icons;

/// One showcased technology (exactly three exist).
pub struct Technology {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    /// SVG path for the accent icon tile.
    pub icon: &'static str,
    /// CSS class picking the tile's accent color.
    pub accent: &'static str,
    pub features: [&'static str; 4],
}

pub static TECHNOLOGIES: [Technology; 3] = [
    Technology {
        id: "html",
        title: "HTML",
        subtitle: "Structure of web pages",
        description: "HTML (HyperText Markup Language) is the markup language that gives \
                      web pages their structure. Tags define headings, paragraphs, links \
                      and every other element on the page.",
        icon: icons::ICON_CODE,
        accent: "orange",
        features: [
            "Semantic markup",
            "Accessibility",
            "SEO friendly",
            "Forms and tables",
        ],
    },
    Technology {
        id: "css",
        title: "CSS",
        subtitle: "Styling and design",
        description: "CSS (Cascading Style Sheets) is the style language that dresses up \
                      HTML elements. It powers beautiful layouts, animations and fully \
                      responsive design.",
        icon: icons::ICON_PALETTE,
        accent: "blue",
        features: [
            "Flexbox and Grid",
            "Animations and transitions",
            "Responsive design",
            "CSS variables",
        ],
    },
    Technology {
        id: "javascript",
        title: "JavaScript",
        subtitle: "Interactivity and logic",
        description: "JavaScript is the programming language that makes web applications \
                      interactive. It drives element behavior and reacts to every user \
                      event.",
        icon: icons::ICON_ZAP,
        accent: "yellow",
        features: [
            "DOM manipulation",
            "Async programming",
            "Modern ES6+",
            "Frameworks and libraries",
        ],
    },
];

pub const HTML_SAMPLE: &str = r#"<div class="container">
  <h1>Welcome!</h1>
  <p>This is HTML markup</p>
  <button onclick="alert('Hello!')">
    Click me
  </button>
</div>"#;

pub const CSS_SAMPLE: &str = r#".container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 20px;
  background: linear-gradient(
    135deg,
    #667eea 0%,
    #764ba2 100%
  );
}

h1 {
  color: #fff;
  font-size: 2.5rem;
  text-align: center;
  margin-bottom: 1rem;
}"#;

pub const JS_SAMPLE: &str = r#"// Interactivity with JavaScript
function createCard(title, content) {
  const card = document.createElement('div');
  card.className = 'card';

  card.innerHTML = `
    <h3>${title}</h3>
    <p>${content}</p>
    <button onclick="showMore()">
      Read more
    </button>
  `;

  return card;
}

// Entrance animation
gsap.from('.card', {
  duration: 1,
  y: 50,
  opacity: 0,
  stagger: 0.2
});"#;

/// Code sample shown in a technology's code panel.
pub fn code_sample(id: &str) -> Option<&'static str> {
    match id {
        "html" => Some(HTML_SAMPLE),
        "css" => Some(CSS_SAMPLE),
        "javascript" => Some(JS_SAMPLE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn css_sample_is_served_verbatim() {
        assert_eq!(code_sample("css"), Some(CSS_SAMPLE));
    }

    #[test]
    fn every_technology_has_a_code_sample() {
        for tech in &TECHNOLOGIES {
            assert!(
                code_sample(tech.id).is_some(),
                "missing sample for {}",
                tech.id
            );
        }
    }

    #[test]
    fn unknown_id_has_no_sample() {
        assert_eq!(code_sample("webassembly"), None);
        assert_eq!(code_sample(""), None);
    }

    #[test]
    fn exactly_three_technologies_in_fixed_order() {
        let ids: Vec<&str> = TECHNOLOGIES.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["html", "css", "javascript"]);
    }
}
