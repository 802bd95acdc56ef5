use social_card::layout::{balance, wrap, BaselineGrid, Line};
use social_card::{Px, TextExtent, TextMeasurer};

/// A rough proportional font: narrow, regular and wide glyph classes
struct Proportional;

impl TextMeasurer for Proportional {
    fn measure(&self, text: &str, size: f32) -> TextExtent {
        let em: f32 = text
            .chars()
            .map(|ch| match ch {
                'i' | 'l' | 'j' | 't' | 'f' | '.' | ',' | ' ' => 0.3,
                'm' | 'w' | 'M' | 'W' => 0.9,
                _ if ch.is_uppercase() => 0.7,
                _ => 0.55,
            })
            .sum();
        TextExtent {
            width: Px(em * size),
            height: Px(1.3 * size),
        }
    }
}

fn words_of(lines: &[Line]) -> Vec<String> {
    lines.iter().flat_map(|line| line.words().to_vec()).collect()
}

fn titles() -> Vec<String> {
    let mut titles = vec![
        "Advanced Patterns for Building High-Performance Web Services".to_string(),
        "Building High-Performance Web Services Today".to_string(),
        "This is a longer title that should wrap across multiple lines".to_string(),
        "Hello".to_string(),
        "Hello World".to_string(),
        lipsum::lipsum(24),
    ];
    titles.extend((3..40).step_by(3).map(lipsum::lipsum_words));
    titles
}

const WIDTHS: [f32; 7] = [0.0, 150.0, 300.0, 400.0, 600.0, 1080.0, 5000.0];

#[test]
fn words_survive_wrapping_and_balancing() {
    for title in titles() {
        for width in WIDTHS {
            let lines = balance(wrap(&title, Px(width), 72.0, &Proportional));
            let expected: Vec<String> = title.split_whitespace().map(str::to_string).collect();
            assert_eq!(words_of(&lines), expected, "{title:?} at {width}");
            assert!(lines.iter().all(|line| line.word_count() > 0), "{title:?} at {width}");
        }
    }
}

#[test]
fn balancing_twice_changes_nothing() {
    for title in titles() {
        for width in WIDTHS {
            let once = balance(wrap(&title, Px(width), 72.0, &Proportional));
            let twice = balance(once.clone());
            assert_eq!(once, twice, "{title:?} at {width}");
        }
    }
}

#[test]
fn no_avoidable_orphans() {
    for title in titles() {
        for width in WIDTHS {
            let lines = balance(wrap(&title, Px(width), 72.0, &Proportional));
            if lines.len() < 2 {
                continue;
            }
            let last = &lines[lines.len() - 1];
            let prev = &lines[lines.len() - 2];
            assert!(
                last.word_count() >= 2 || prev.word_count() == 1,
                "orphan {:?} below {:?} in {title:?} at {width}",
                last.text(),
                prev.text(),
            );
        }
    }
}

#[test]
fn greedy_lines_fit_unless_a_single_word_overflows() {
    for title in titles() {
        for width in WIDTHS {
            for line in wrap(&title, Px(width), 72.0, &Proportional) {
                assert!(
                    Proportional.width(&line.text(), 72.0) <= Px(width) || line.word_count() == 1,
                    "{:?} overflows {width}",
                    line.text()
                );
            }
        }
    }
}

#[test]
fn one_word_is_one_line() {
    for width in WIDTHS {
        let lines = wrap("Hello", Px(width), 72.0, &Proportional);
        assert_eq!(lines, vec![Line::from("Hello")]);
    }
    assert!(wrap("", Px(500.0), 72.0, &Proportional).is_empty());
}

#[test]
fn grid_is_monotonic() {
    let grid = BaselineGrid::for_font(&Proportional, 72.0, Px(135.0), 1.5);
    for i in 0..50 {
        assert!(grid.baseline(i + 1) > grid.baseline(i));
    }
}
