//! Interactive terminal front-end built on dialoguer.

use career_fit::assessment::{
    InputSurface, LandingPage, Question, QuestionRenderer, QuestionView, RawAnswer, RenderError,
    ResultsView, UserAction,
};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::fmt::Write as _;

fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompt_error(err: dialoguer::Error) -> RenderError {
    if is_cancelled(&err) {
        RenderError::Cancelled
    } else {
        RenderError::Backend(err.to_string())
    }
}

/// Menu entries offered once the current question has an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavChoice {
    Next,
    Previous,
    Change,
    Quit,
}

fn nav_menu(view: &QuestionView<'_>) -> Vec<(&'static str, NavChoice)> {
    let mut items = vec![(view.next_label(), NavChoice::Next)];
    if view.can_go_back() {
        items.push(("Previous", NavChoice::Previous));
    }
    items.push(("Change answer", NavChoice::Change));
    items.push(("Quit", NavChoice::Quit));
    items
}

/// Renders one question at a time with dialoguer prompts.
///
/// A question without an answer goes straight to its input prompt. Once
/// answered, the renderer offers navigation instead.
pub(crate) struct TerminalRenderer {
    theme: ColorfulTheme,
    shown: Option<&'static str>,
    editing: bool,
}

impl TerminalRenderer {
    pub(crate) fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            shown: None,
            editing: false,
        }
    }

    fn capture(&self, view: &QuestionView<'_>) -> Result<UserAction, RenderError> {
        match &view.surface {
            InputSurface::Scale {
                min, max, value, ..
            } => {
                let (min, max) = (i64::from(*min), i64::from(*max));
                let answer = Input::<i64>::with_theme(&self.theme)
                    .with_prompt(format!(
                        "Your rating ({min} = strongly disagree, {max} = strongly agree)"
                    ))
                    .default(i64::from(*value))
                    .validate_with(move |input: &i64| -> Result<(), String> {
                        if (min..=max).contains(input) {
                            Ok(())
                        } else {
                            Err(format!("enter a number from {min} to {max}"))
                        }
                    })
                    .interact_text()
                    .map_err(prompt_error)?;
                Ok(UserAction::Answer(RawAnswer::Number(answer)))
            }
            InputSurface::Choice {
                options, selected, ..
            } => {
                let picked = Select::with_theme(&self.theme)
                    .with_prompt("Choose an answer (Esc to quit)")
                    .items(options)
                    .default(selected.unwrap_or(0))
                    .interact_opt()
                    .map_err(prompt_error)?;
                Ok(match picked.and_then(|index| options.get(index)) {
                    Some(label) => UserAction::Answer(RawAnswer::Text((*label).to_string())),
                    None => UserAction::Quit,
                })
            }
            InputSurface::Edit { text, .. } => {
                let mut input = Input::<String>::with_theme(&self.theme)
                    .with_prompt("Your rewrite")
                    .allow_empty(true);
                if let Some(existing) = text {
                    input = input.with_initial_text(existing.clone());
                }
                let rewrite = input.interact_text().map_err(prompt_error)?;
                Ok(UserAction::Answer(RawAnswer::Text(rewrite)))
            }
        }
    }

    fn navigate(&self, view: &QuestionView<'_>) -> Result<NavChoice, RenderError> {
        let menu = nav_menu(view);
        let labels: Vec<&str> = menu.iter().map(|(label, _)| *label).collect();
        let picked = Select::with_theme(&self.theme)
            .with_prompt(format!("Your answer: {}", current_answer(&view.surface)))
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;
        Ok(picked
            .and_then(|index| menu.get(index))
            .map_or(NavChoice::Quit, |(_, choice)| *choice))
    }
}

impl QuestionRenderer for TerminalRenderer {
    fn render(&mut self, view: &QuestionView<'_>) -> Result<UserAction, RenderError> {
        if self.shown != Some(view.question.id) {
            println!("{}", question_header(view));
            self.shown = Some(view.question.id);
            self.editing = false;
        }

        if !view.answered || self.editing {
            self.editing = false;
            return self.capture(view);
        }

        Ok(match self.navigate(view)? {
            NavChoice::Next => UserAction::Next,
            NavChoice::Previous => UserAction::Previous,
            NavChoice::Quit => UserAction::Quit,
            NavChoice::Change => {
                self.editing = true;
                return self.capture(view);
            }
        })
    }

    fn reject(&mut self, _view: &QuestionView<'_>, message: &str) {
        println!("  ! {message}");
    }
}

/// Ask whether to begin. Esc or Ctrl+C counts as no.
pub(crate) fn confirm_start() -> Result<bool, RenderError> {
    match Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Start Assessment?")
        .default(true)
        .interact_opt()
    {
        Ok(answer) => Ok(answer.unwrap_or(false)),
        Err(err) if is_cancelled(&err) => Ok(false),
        Err(err) => Err(prompt_error(err)),
    }
}

fn current_answer(surface: &InputSurface) -> String {
    match surface {
        InputSurface::Scale { value, max, .. } => format!("{value}/{max}"),
        InputSurface::Choice {
            options, selected, ..
        } => selected
            .and_then(|index| options.get(index))
            .map_or_else(|| "-".to_string(), |label| (*label).to_string()),
        InputSurface::Edit { text, .. } => match text.as_deref() {
            Some("") | None => "(blank)".to_string(),
            Some(text) => format!("\"{text}\""),
        },
    }
}

pub(crate) fn question_header(view: &QuestionView<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n{} ({}% complete)  [{}]",
        view.position_label(),
        view.progress_pct(),
        view.badge()
    );
    let _ = writeln!(out, "{}", view.question.prompt);
    match &view.surface {
        InputSurface::Scale { .. } => {}
        InputSurface::Choice { scenario, .. } => {
            if let Some(scenario) = scenario {
                let _ = writeln!(out, "  Scenario: {scenario}");
            }
        }
        InputSurface::Edit {
            original,
            instruction,
            ..
        } => {
            let _ = writeln!(out, "  Original: \"{original}\"");
            let _ = writeln!(out, "  {instruction}");
        }
    }
    out
}

pub(crate) fn landing_text(page: &LandingPage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", page.headline);
    let _ = writeln!(out, "{}\n", page.summary);
    let _ = writeln!(out, "{}", page.role_overview);
    let _ = writeln!(out, "Typical roles: {}\n", page.roles.join(", "));
    for feature in &page.features {
        let _ = writeln!(out, "* {}: {}", feature.title, feature.description);
    }
    out
}

pub(crate) fn results_text(view: &ResultsView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nYour UX Copywriting Assessment Results");
    let _ = writeln!(
        out,
        "Completed {}\n",
        view.completed_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(
        out,
        "Overall score: {}/100  ({})",
        view.overall_score, view.recommendation_label
    );
    let _ = writeln!(out, "{}\n", view.message);

    for line in view.core_scores.iter().chain(&view.wiscar_scores) {
        let _ = writeln!(out, "  {:<28} {:>3}", line.label, line.score);
    }

    let _ = writeln!(out, "\nCareer paths");
    for path in &view.career_paths {
        let _ = writeln!(out, "  {}: {}", path.title, path.detail);
    }

    let _ = writeln!(out, "\nNext steps");
    for (position, step) in view.next_steps.iter().enumerate() {
        let _ = writeln!(out, "  {}. {step}", position + 1);
    }
    out
}

pub(crate) fn question_list(questions: &[Question]) -> String {
    let mut out = String::new();
    for (position, question) in questions.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. [{}] {} ({})",
            position + 1,
            question.category.badge(),
            question.prompt,
            question.kind.label()
        );
    }
    out
}
