use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub const LIGHT: Theme = Theme {
	base: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(248, 250, 252)),
	header: Style::new()
		.fg(Color::Rgb(51, 65, 85))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
	highlight: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(253, 224, 71))
		.add_modifier(Modifier::BOLD),
	title: Style::new()
		.fg(Color::Rgb(30, 64, 175))
		.add_modifier(Modifier::BOLD),
	warning: Style::new().fg(Color::Rgb(180, 83, 9)),
	error: Style::new().fg(Color::Rgb(185, 28, 28)),
};

pub const DARK: Theme = Theme {
	base: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	header: Style::new()
		.fg(Color::Rgb(148, 163, 184))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(56, 189, 248)),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
	highlight: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(250, 204, 21))
		.add_modifier(Modifier::BOLD),
	title: Style::new()
		.fg(Color::Rgb(147, 197, 253))
		.add_modifier(Modifier::BOLD),
	warning: Style::new().fg(Color::Rgb(251, 191, 36)),
	error: Style::new().fg(Color::Rgb(248, 113, 113)),
};
