use myrtio_ble_session::WriteHandler;
use myrtio_light_animator::CommandDispatcher;

/// Light control on top of the command dispatcher
pub(crate) struct LightUsecases {
    dispatcher: CommandDispatcher<'static>,
}

impl LightUsecases {
    pub(crate) fn new(dispatcher: CommandDispatcher<'static>) -> Self {
        Self { dispatcher }
    }
}

impl WriteHandler for LightUsecases {
    fn on_write(&mut self, payload: &[u8]) {
        let Some(command) = self.dispatcher.on_write(payload) else {
            return;
        };
        log::info!(
            "usecases: applied '{}', heap used {} free {}",
            char::from(command.code()),
            esp_alloc::HEAP.used(),
            esp_alloc::HEAP.free()
        );
    }
}
