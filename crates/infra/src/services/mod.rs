mod push;

pub use push::{
    IPushTransport, PushError, RecordingPushTransport, ScriptedOutcome, WebPushTransport,
};
