//! Contact form: client-side validation plus a simulated submission.
//! There is no real endpoint; a submit "succeeds" after a short delay unless
//! the form is torn down first, which cancels the pending task.

use crate::reveal::reveal;
use aicare_ui::*;
use std::rc::Rc;
use zoon::*;

const SUBMIT_DELAY_MS: u32 = 1_000;
const SUCCESS_BANNER_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(self) -> bool {
        self == Self::default()
    }
}

/// Per-field checks; one bad field never blocks correcting another.
pub fn validate(name: &str, email: &str, message: &str) -> FormErrors {
    FormErrors {
        name: name.trim().is_empty().then_some("Name is required"),
        email: if email.trim().is_empty() {
            Some("Email is required")
        } else if !is_valid_email(email.trim()) {
            Some("Email is invalid")
        } else {
            None
        },
        message: message.trim().is_empty().then_some("Message is required"),
    }
}

/// Same shape the site has always accepted: local part, @, domain with a
/// dot, and no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[derive(Clone)]
pub struct ContactForm {
    name: Mutable<String>,
    email: Mutable<String>,
    message: Mutable<String>,
    name_error: Mutable<Option<&'static str>>,
    email_error: Mutable<Option<&'static str>>,
    message_error: Mutable<Option<&'static str>>,
    submitting: Mutable<bool>,
    submitted: Mutable<bool>,
    // Owning the handle ties the simulated request to the form's lifetime;
    // dropping the form cancels an in-flight submit.
    submit_task: Rc<Mutable<Option<TaskHandle>>>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: Mutable::new(String::new()),
            email: Mutable::new(String::new()),
            message: Mutable::new(String::new()),
            name_error: Mutable::new(None),
            email_error: Mutable::new(None),
            message_error: Mutable::new(None),
            submitting: Mutable::new(false),
            submitted: Mutable::new(false),
            submit_task: Rc::new(Mutable::new(None)),
        }
    }

    fn submit(&self) {
        if self.submitting.get() {
            return;
        }
        let errors = validate(
            &self.name.lock_ref(),
            &self.email.lock_ref(),
            &self.message.lock_ref(),
        );
        self.name_error.set_neq(errors.name);
        self.email_error.set_neq(errors.email);
        self.message_error.set_neq(errors.message);
        if !errors.is_empty() {
            return;
        }

        self.submitting.set_neq(true);
        // The task captures only the field mutables, never `submit_task`
        // itself; otherwise the handle would keep its own task alive and
        // teardown could no longer cancel it.
        let name = self.name.clone();
        let email = self.email.clone();
        let message = self.message.clone();
        let submitting = self.submitting.clone();
        let submitted = self.submitted.clone();
        self.submit_task
            .set(Some(Task::start_droppable(async move {
                Timer::sleep(SUBMIT_DELAY_MS).await;
                name.set_neq(String::new());
                email.set_neq(String::new());
                message.set_neq(String::new());
                submitting.set_neq(false);
                submitted.set_neq(true);
                Timer::sleep(SUCCESS_BANNER_MS).await;
                submitted.set_neq(false);
            })));
    }

    pub fn view(&self) -> impl Element {
        let form = self.clone();
        El::new()
            .s(Width::fill())
            .child_signal(self.submitted.signal().map(move |submitted| {
                if submitted {
                    form.success_panel().unify()
                } else {
                    form.form_fields().unify()
                }
            }))
    }

    fn success_panel(&self) -> impl Element {
        reveal(
            Column::new()
                .s(Width::fill())
                .s(Padding::all(SPACING_32))
                .s(Gap::new().y(SPACING_12))
                .s(RoundedCorners::all(CORNER_RADIUS_12))
                .s(Background::new().color_signal(success_1()))
                .item(
                    El::new().s(Align::new().center_x()).child(
                        icon(IconName::Check)
                            .size(IconSize::XLarge)
                            .color(IconColor::Success)
                            .build(),
                    ),
                )
                .item(
                    El::new()
                        .s(Align::new().center_x())
                        .s(Font::new()
                            .size(FONT_SIZE_18)
                            .weight(FontWeight::Number(FONT_WEIGHT_6))
                            .color_signal(success_9()))
                        .child(Text::new("Message Sent!")),
                )
                .item(
                    El::new()
                        .s(Align::new().center_x())
                        .s(Font::new().size(FONT_SIZE_16).color_signal(success_7()))
                        .child(Text::new(
                            "Thank you for contacting us. We'll get back to you soon.",
                        )),
                ),
        )
    }

    fn form_fields(&self) -> impl Element {
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_16))
            .item(h3("Send us a Message"))
            .item(
                input(self.name.clone())
                    .label("Full Name")
                    .required(true)
                    .placeholder("Enter your name")
                    .error(self.name_error.read_only())
                    .on_change({
                        let error = self.name_error.clone();
                        move |_| error.set_neq(None)
                    })
                    .build(),
            )
            .item(
                input(self.email.clone())
                    .label("Email Address")
                    .required(true)
                    .kind(InputKind::Email)
                    .placeholder("Enter your email")
                    .error(self.email_error.read_only())
                    .on_change({
                        let error = self.email_error.clone();
                        move |_| error.set_neq(None)
                    })
                    .build(),
            )
            .item(
                textarea(self.message.clone())
                    .label("Your Message")
                    .required(true)
                    .placeholder("Type your message...")
                    .error(self.message_error.read_only())
                    .on_change({
                        let error = self.message_error.clone();
                        move |_| error.set_neq(None)
                    })
                    .build(),
            )
            .item(
                El::new()
                    .s(Width::fill())
                    .child_signal(self.submitting.signal().map({
                        let form = self.clone();
                        move |submitting| {
                            let form = form.clone();
                            button()
                                .label(if submitting {
                                    "Processing..."
                                } else {
                                    "Send Message"
                                })
                                .variant(ButtonVariant::Primary)
                                .size(ButtonSize::Large)
                                .on_press(move || form.submit())
                                .build()
                        }
                    })),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_fail_validation_per_field() {
        let errors = validate("", "", "");
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.message, Some("Message is required"));
        assert!(!errors.is_empty());
    }

    #[test]
    fn malformed_email_is_reported_without_blocking_other_fields() {
        let errors = validate("Ada", "not-an-email", "Hello");
        assert_eq!(errors.name, None);
        assert_eq!(errors.email, Some("Email is invalid"));
        assert_eq!(errors.message, None);
    }

    #[test]
    fn complete_submission_passes() {
        let errors = validate("Ada Lovelace", "ada@example.com", "Tell me about Dx2D.");
        assert!(errors.is_empty());
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("missing-at.com"));
        assert!(!is_valid_email("@no-local.com"));
        assert!(!is_valid_email("no-domain@"));
        assert!(!is_valid_email("no-dot@domain"));
        assert!(!is_valid_email("dot@.com"));
        assert!(!is_valid_email("spaces in@mail.com"));
    }

    #[test]
    fn whitespace_only_input_is_rejected() {
        let errors = validate("   ", " ", "\n\t");
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.message, Some("Message is required"));
    }
}
