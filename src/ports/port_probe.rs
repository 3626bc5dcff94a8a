/// Port for checking whether a local TCP port can be bound.
pub trait PortProbe {
    fn is_free(&self, port: u16) -> bool;
}
