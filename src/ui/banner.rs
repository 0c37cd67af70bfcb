use colored::Colorize;

const BANNER: &[&str] = &[
    "   ▄████████    ▄████████ ████████▄     ▄████████    ▄████████    ▄████████      ",
    "  ███    ███   ███    ███ ███   ▀███   ███    ███   ███    ███   ███    ███      ",
    "  ███    █▀    ███    █▀  ███    ███   ███    ███   ███    ███   ███    █▀       ",
    " ▄███▄▄▄       ███        ███    ███  ▄███▄▄▄▄██▀   ███    ███   ███             ",
    "▀▀███▀▀▀     ▀███████████ ███    ███ ▀▀███▀▀▀▀▀   ▀███████████ ▀███████████      ",
    "  ███    █▄           ███ ███    ███ ▀███████████   ███    ███          ███      ",
    "  ███    ███    ▄█    ███ ███   ▄███   ███    ███   ███    ███    ▄█    ███      ",
    "  ██████████  ▄████████▀  ████████▀    ███    ███   ███    █▀   ▄████████▀       ",
    "                                       ███    ███                                ",
];

const AUTHOR: &str = "                                                                  by p314dO";

/// Convert HSL to RGB color space
/// H: 0.0-360.0 (hue), S: 0.0-1.0 (saturation), L: 0.0-1.0 (lightness)
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let h = h % 360.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err() && colored::control::SHOULD_COLORIZE.should_colorize()
}

/// One hue per line, sweeping `hue_range` degrees from `start_hue` top to bottom.
pub fn render(lines: &[&str], start_hue: f32, hue_range: f32) -> Vec<String> {
    if !colors_enabled() || lines.len() < 2 {
        return lines.iter().map(|l| l.to_string()).collect();
    }

    let last = (lines.len() - 1) as f32;
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let hue = start_hue + (i as f32 / last) * hue_range;
            let (r, g, b) = hsl_to_rgb(hue, 0.8, 0.6);
            line.truecolor(r, g, b).to_string()
        })
        .collect()
}

pub fn print_banner() {
    println!();
    println!();
    for line in render(BANNER, 200.0, 120.0) {
        println!("{}", line);
    }
    println!("{}", AUTHOR.dimmed());
    println!();
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0, 0, 255));
    }

    #[test]
    fn test_plain_when_colors_disabled() {
        colored::control::set_override(false);
        let lines = render(BANNER, 0.0, 90.0);
        colored::control::unset_override();
        assert_eq!(lines.len(), BANNER.len());
        assert_eq!(lines[0], BANNER[0]);
    }
}
