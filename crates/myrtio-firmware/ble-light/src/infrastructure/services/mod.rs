mod gatt;

pub(crate) use gatt::LightServer;
