//! Binary command encoders for IR-controlled appliances.
//!
//! Each appliance module turns a sparse options record into the exact byte
//! sequence its remote would transmit; the codec module tags, bundles and
//! (for the software-defined interval scheme) expands those bytes into the
//! payloads the IR transmitter firmware expects. Delivery of the finished
//! buffers (MQTT publish etc.) is the caller's concern.

pub mod dump;
pub mod protocol;
