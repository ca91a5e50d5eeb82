pub mod events;
pub mod packet;
pub mod protocol;
pub mod socket_client;
