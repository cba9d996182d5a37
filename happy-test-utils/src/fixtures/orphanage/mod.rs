use crate::TestSetup;

pub mod factory;
pub mod mockito;

impl TestSetup {
    pub fn orphanages<'a>(&'a mut self) -> OrphanageFixtures<'a> {
        OrphanageFixtures { setup: self }
    }
}

pub struct OrphanageFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
