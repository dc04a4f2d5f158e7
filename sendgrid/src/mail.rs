use serde::Serialize;

/// A sender or recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Address {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn named(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// A single message with one recipient and both a plain and an HTML body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mail {
    pub to: Address,
    pub from: Address,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Body of `POST /v3/mail/send`.
#[derive(Debug, Serialize)]
pub(crate) struct MailSendRequest<'a> {
    personalizations: [Personalization<'a>; 1],
    from: &'a Address,
    subject: &'a str,
    content: [Content<'a>; 2],
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: [&'a Address; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    mime_type: &'static str,
    value: &'a str,
}

impl<'a> From<&'a Mail> for MailSendRequest<'a> {
    fn from(mail: &'a Mail) -> Self {
        Self {
            personalizations: [Personalization { to: [&mail.to] }],
            from: &mail.from,
            subject: &mail.subject,
            // SendGrid requires text/plain before text/html.
            content: [
                Content {
                    mime_type: "text/plain",
                    value: &mail.text,
                },
                Content {
                    mime_type: "text/html",
                    value: &mail.html,
                },
            ],
        }
    }
}
