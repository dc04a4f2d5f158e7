/// Sender identity shown in the recipient's mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub email: String,
    pub name: String,
}

/// A fully rendered message ready to hand to a mailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub from: Sender,
    pub subject: String,
    pub text: String,
    pub html: String,
}
