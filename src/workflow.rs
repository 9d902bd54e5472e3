/// Workflow controller for the five analysis actions.
///
/// The surface exposes exactly five actions (open, lexical, syntax,
/// semantic, clear) and the workflow walks them in a fixed order: each
/// stage unlocks the single action that may fire next. A failed check
/// never advances the stage; only a pass does.
use eframe::egui;

// ─── Actions ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    OpenFile,
    Lexical,
    Syntax,
    Semantic,
    Clear,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::OpenFile,
        Action::Lexical,
        Action::Syntax,
        Action::Semantic,
        Action::Clear,
    ];

    pub const fn index(self) -> usize {
        match self {
            Action::OpenFile => 0,
            Action::Lexical => 1,
            Action::Syntax => 2,
            Action::Semantic => 3,
            Action::Clear => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::OpenFile => "Open File",
            Action::Lexical => "Lexical Analysis",
            Action::Syntax => "Syntax Analysis",
            Action::Semantic => "Semantic Analysis",
            Action::Clear => "Clear",
        }
    }
}

// ─── Stages ──────────────────────────────────────────────────────────────────

/// One coherent snapshot of the workflow. Each stage maps every action to
/// a locked flag; exactly one action is unlocked at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Initial,
    Opened,
    LexicalPassed,
    SyntaxPassed,
    SemanticPassed,
}

impl Stage {
    /// The one action permitted in this stage.
    pub fn unlocked_action(self) -> Action {
        match self {
            Stage::Initial => Action::OpenFile,
            Stage::Opened => Action::Lexical,
            Stage::LexicalPassed => Action::Syntax,
            Stage::SyntaxPassed => Action::Semantic,
            Stage::SemanticPassed => Action::Clear,
        }
    }

    pub fn is_locked(self, action: Action) -> bool {
        action != self.unlocked_action()
    }
}

// ─── Presentation ────────────────────────────────────────────────────────────

/// The visual consequences of a locked flag: whether the button accepts
/// input, and which cursor to show while hovering it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonPresentation {
    pub interactive: bool,
    pub cursor: egui::CursorIcon,
}

impl ButtonPresentation {
    pub fn from_locked(locked: bool) -> Self {
        if locked {
            Self {
                interactive: false,
                cursor: egui::CursorIcon::NotAllowed,
            }
        } else {
            Self::enabled()
        }
    }

    pub fn enabled() -> Self {
        Self {
            interactive: true,
            cursor: egui::CursorIcon::PointingHand,
        }
    }
}

/// Per-action presentation cache, indexed by [`Action::index`].
pub type PresentationMap = [ButtonPresentation; 5];

/// Project `stage` onto the presentation cache. Derives both effects
/// purely from each action's locked flag; no other side effects, and
/// applying the same stage twice yields the same map.
pub fn apply_stage(presentation: &mut PresentationMap, stage: Stage) {
    for action in Action::ALL {
        presentation[action.index()] = ButtonPresentation::from_locked(stage.is_locked(action));
    }
}
