// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use visitpass_core::{
    ChannelEmitter, ComposedTimestamp, Config as CoreConfig, DateTimeComposer, EmitMode, Identity,
    PreApprovalRequest,
};

use crate::config::Config;
use crate::tui;

#[derive(Debug, Clone)]
pub struct CmdPreApprove {
    pub visitor_id: i64,
    pub employee_id: Option<i64>,
    pub max_per_day: Option<u32>,
}

impl CmdPreApprove {
    pub const NAME: &str = "preapprove";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Pick a validity window and print the pre-approval request body")
            .arg(
                arg!(--"visitor-id" <ID> "Visitor to pre-approve")
                    .value_parser(value_parser!(i64))
                    .required(true),
            )
            .arg(
                arg!(--"employee-id" <ID> "Approving employee, defaults to the configured session")
                    .value_parser(value_parser!(i64)),
            )
            .arg(
                arg!(--"max-per-day" <COUNT> "Maximum visits per day")
                    .value_parser(value_parser!(u32).range(1..)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            visitor_id: matches
                .get_one("visitor-id")
                .copied()
                .ok_or("Visitor id is required")?,
            employee_id: matches.get_one("employee-id").copied(),
            max_per_day: matches.get_one("max-per-day").copied(),
        })
    }

    pub fn run(self, core_config: &CoreConfig, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "drafting pre-approval...");
        let identity = self.identity(config)?;

        let tz = core_config.time_zone()?;
        let Some(valid_from) = pick("Valid From", None, core_config, &tz)? else {
            tracing::info!("user cancel the pre-approval");
            return Ok(());
        };
        let Some(valid_to) = pick("Valid To", Some(&valid_from), core_config, &tz)? else {
            tracing::info!("user cancel the pre-approval");
            return Ok(());
        };

        let request = self.request(&identity, valid_from, valid_to);
        println!("{}", serde_json::to_string_pretty(&request)?);
        Ok(())
    }

    /// The acting employee, from the command line or else the configured session.
    pub fn identity(&self, config: &Config) -> Result<Identity, Box<dyn Error>> {
        match (self.employee_id, &config.session) {
            (Some(id), Some(session)) if id == session.employee_id => Ok(session.clone()),
            (Some(id), _) => Ok(Identity::new(id)),
            (None, Some(session)) => Ok(session.clone()),
            (None, None) => {
                Err("No employee id: pass --employee-id or set [session] employee_id".into())
            }
        }
    }

    pub fn request(
        &self,
        identity: &Identity,
        valid_from: ComposedTimestamp,
        valid_to: ComposedTimestamp,
    ) -> PreApprovalRequest {
        let request = PreApprovalRequest::new(identity, self.visitor_id, valid_from, valid_to);
        match self.max_per_day {
            Some(max) => request.with_max_visits_per_day(max),
            None => request,
        }
    }
}

/// Runs one confirm-mode picker, seeded from `initial` when given.
fn pick(
    label: &str,
    initial: Option<&ComposedTimestamp>,
    config: &CoreConfig,
    tz: &jiff::tz::TimeZone,
) -> Result<Option<ComposedTimestamp>, Box<dyn Error>> {
    let (emitter, rx) = ChannelEmitter::channel();
    let composer = DateTimeComposer::new(label, EmitMode::Confirm, emitter)
        .with_time_zone(tz.clone())
        .with_default_slot(config.default_slot);
    let composer = match initial {
        Some(value) => composer.with_initial_value(value.as_zoned()),
        None => composer,
    };
    tui::pick_datetime(composer, rx)
}
