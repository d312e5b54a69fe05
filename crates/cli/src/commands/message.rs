use clap::Args;
use giftery_ai::{AdvisorError, GiftAdvisor, HttpGiftAdvisor, MessageRequest, MessageStyle};
use giftery_core::config::LoadOptions;
use serde_json::Value;

use crate::commands::{build_runtime, load_config, CommandResult};

#[derive(Args, Debug)]
pub struct MessageArgs {
    #[arg(long, help = "Occasion the message is for (e.g. birthday)")]
    pub occasion: String,
    #[arg(
        long,
        value_parser = parse_style,
        help = "Message style (heartfelt|funny|formal|casual|romantic|grateful|warm|professional)"
    )]
    pub style: MessageStyle,
    #[arg(
        long,
        value_name = "NAME",
        conflicts_with_all = ["thank_for", "from"],
        required_unless_present = "thank_for",
        help = "Compose a greeting card for this recipient"
    )]
    pub recipient: Option<String>,
    #[arg(
        long,
        value_name = "TEXT",
        requires = "recipient",
        help = "Personal note to weave into a greeting card"
    )]
    pub personal: Option<String>,
    #[arg(
        long,
        value_name = "GIFT",
        requires = "from",
        help = "Compose a thank-you note for this gift"
    )]
    pub thank_for: Option<String>,
    #[arg(
        long,
        value_name = "NAME",
        requires = "thank_for",
        help = "Sender name for a thank-you note"
    )]
    pub from: Option<String>,
}

pub fn run(options: LoadOptions, args: MessageArgs) -> CommandResult {
    let config = match load_config("message", options) {
        Ok(config) => config,
        Err(failure) => return failure,
    };

    let MessageArgs { occasion, style, recipient, personal, thank_for, from } = args;
    let request = match (recipient, thank_for, from) {
        (Some(recipient), None, None) => {
            let request = MessageRequest::greeting_card(recipient, occasion, style);
            match personal {
                Some(note) => request.with_personal_message(note),
                None => request,
            }
        }
        (None, Some(gift), Some(sender)) => {
            MessageRequest::thank_you_note(gift, sender, occasion, style)
        }
        _ => {
            return CommandResult::failure(
                "message",
                "invalid_argument",
                "pass either --recipient or --thank-for together with --from",
                2,
            );
        }
    };

    let advisor = match HttpGiftAdvisor::from_config(&config.advisor) {
        Ok(advisor) => advisor,
        Err(error) => {
            return CommandResult::failure("message", "advisor_init", error.to_string(), 3);
        }
    };

    let runtime = match build_runtime("message") {
        Ok(runtime) => runtime,
        Err(failure) => return failure,
    };

    match runtime.block_on(advisor.compose_message(&request)) {
        Ok(composed) => {
            let message = format!("composed a {}", request.kind().replace('_', " "));
            let data = serde_json::to_value(&composed).unwrap_or(Value::Null);
            CommandResult::success_with_data("message", message, data)
        }
        Err(AdvisorError::InvalidRequest(reason)) => {
            CommandResult::failure("message", "invalid_request", reason, 2)
        }
        Err(error) => CommandResult::failure("message", error.code().as_str(), error.to_string(), 7),
    }
}

fn parse_style(value: &str) -> Result<MessageStyle, String> {
    value.parse::<MessageStyle>()
}
