mod usecases;

pub(crate) use usecases::LightUsecases;
