// src/controllers/osc.rs
//
// External scroll driver. Messages are parsed into commands and queued;
// the app drains the queue once per update.

use nannou_osc as osc;
use std::error::Error;

#[derive(Debug)]
pub enum OscCommand {
    ScrollTo { y: f32 },
    ScrollBy { dy: f32 },
    ScrollToPercent { percent: f32 },
}

pub struct OscController {
    command_queue: Vec<OscCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match message.addr.as_str() {
                    "/scroll/set" => {
                        if let [osc::Type::Float(y)] = &message.args[..] {
                            self.command_queue.push(OscCommand::ScrollTo { y: *y });
                        }
                    }
                    "/scroll/by" => {
                        if let [osc::Type::Float(dy)] = &message.args[..] {
                            self.command_queue.push(OscCommand::ScrollBy { dy: *dy });
                        }
                    }
                    "/scroll/percent" => {
                        if let [osc::Type::Float(percent)] = &message.args[..] {
                            self.command_queue.push(OscCommand::ScrollToPercent {
                                percent: *percent,
                            });
                        }
                    }
                    other => {
                        log::debug!("ignoring unknown OSC address: {}", other);
                    }
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<OscCommand> {
        std::mem::take(&mut self.command_queue)
    }
}
