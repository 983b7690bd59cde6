/// Button styling shared by every dialog this crate presents. Built once at
/// startup and handed to the component tree through context; nothing mutates
/// it afterwards, so all confirmation and result dialogs render their
/// buttons identically.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DialogTheme {
    pub confirm_button_class: &'static str,
    pub cancel_button_class: &'static str,
    /// When true, fall back to the generic dialog button look instead of the
    /// classes above.
    pub buttons_styling: bool,
}

impl DialogTheme {
    pub fn bootstrap() -> Self {
        Self {
            confirm_button_class: "btn btn-primary mr-1",
            cancel_button_class: "btn btn-secondary",
            buttons_styling: false,
        }
    }

    pub fn confirm_class(&self) -> &'static str {
        if self.buttons_styling {
            "dialog-button"
        } else {
            self.confirm_button_class
        }
    }

    pub fn cancel_class(&self) -> &'static str {
        if self.buttons_styling {
            "dialog-button"
        } else {
            self.cancel_button_class
        }
    }
}

impl Default for DialogTheme {
    fn default() -> Self {
        Self::bootstrap()
    }
}
