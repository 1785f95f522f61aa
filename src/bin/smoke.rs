//! Summarizes a handful of canned emails against the configured model server.
//! Useful for checking a local model setup before pointing the browser
//! extension at the server.

use anyhow::Result;
use inbox_agent::{assistant::EmailAssistant, config, llm::create_inference_client, logging};
use tracing::{error, info};

struct SampleEmail {
    kind: &'static str,
    content: &'static str,
}

const SAMPLE_EMAILS: &[SampleEmail] = &[
    SampleEmail {
        kind: "Meeting Invite",
        content: "Subject: Quarterly Review Meeting - Please Confirm Attendance

Dear All,

This is a reminder for our upcoming Quarterly Review Meeting scheduled for next Friday, June 15th, \
from 10:00 AM to 12:00 PM in the Main Conference Room.

Agenda:
1. Q2 Performance Review
2. Q3 Goals and Objectives
3. Budget Allocation for Q3

Please confirm your attendance by responding to this email. If you cannot attend, please designate \
a representative from your department.

Best regards,
Sarah Johnson
Executive Assistant",
    },
    SampleEmail {
        kind: "Newsletter",
        content: "Subject: TechCo Monthly Newsletter - June 2023

Dear Subscribers,

Welcome to our June newsletter! Here's what's new at TechCo:

1. Product Launch: We're excited to announce the release of TechPro 5.0!
2. Upcoming Webinar: \"AI in Business\" - Join us on June 20th at 2 PM EST.
3. Customer Spotlight: How ACME Corp increased productivity by 30% using our solutions.
4. Job Openings: We're hiring! Check out our careers page for current opportunities.

The TechCo Team",
    },
    SampleEmail {
        kind: "Personal Email",
        content: "Subject: Summer Vacation Plans

Hey Alex,

I was thinking we could go to the beach for a week in August. I found a rental house right on the \
water that is available from August 15-22. Let me know if those dates work for you and your family.

We could do some kayaking, have a bonfire on the beach, and take a day trip to the nearby town.

Cheers,
Sam",
    },
    SampleEmail {
        kind: "Project Update",
        content: "Subject: Project Phoenix - Week 12 Update

Dear Stakeholders,

Accomplishments:
1. Completed the backend integration for the user authentication module
2. Finalized the UI designs for the dashboard and settings pages
3. Conducted successful load testing for up to 10,000 concurrent users

Challenges:
1. Encountered some issues with cross-browser compatibility, working on fixes

Next Steps:
1. Begin front-end implementation of the dashboard
2. Initiate the security audit process

We're still on track for our planned release date.

Best regards,
Emily Chen
Project Manager",
    },
];

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load().await?;
    let log_guard = logging::init(&config.server.logs)?;

    let assistant = EmailAssistant::new(create_inference_client(&config.llm)?);

    info!("Starting email summarization smoke run");

    let mut failures = 0;
    for sample in SAMPLE_EMAILS {
        info!("Testing {} email", sample.kind);
        match assistant.summarize(sample.content).await {
            Ok(summary) => {
                info!("Email summarization successful for {}", sample.kind);
                println!("--- {} ---\n{}\n", sample.kind, summary);
            }
            Err(e) => {
                failures += 1;
                error!("Error during {} email summarization: {}", sample.kind, e);
            }
        }
    }

    info!(
        "Email summarization smoke run completed: {} of {} failed",
        failures,
        SAMPLE_EMAILS.len()
    );

    log_guard.shutdown();

    if failures > 0 {
        anyhow::bail!("{} sample email(s) failed to summarize", failures);
    }

    Ok(())
}
