// ============================================================================
// LIFECYCLE - Generación de montaje de una página
// ============================================================================
// Cada tarea async captura un MountToken al lanzarse. Su resultado solo se
// aplica si la página sigue montada con esa misma generación.
// ============================================================================

/// Identifica un montaje concreto de una página
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountToken(u64);

#[derive(Clone, Debug, Default)]
pub struct Lifecycle {
    generation: u64,
    mounted: bool,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Montar (o re-montar) la página, invalidando tokens anteriores
    pub fn mount(&mut self) -> MountToken {
        self.generation += 1;
        self.mounted = true;
        MountToken(self.generation)
    }

    /// Desmontar: ningún token emitido hasta ahora sigue siendo válido
    pub fn unmount(&mut self) {
        self.generation += 1;
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Token del montaje actual (None si está desmontada)
    pub fn token(&self) -> Option<MountToken> {
        self.mounted.then_some(MountToken(self.generation))
    }

    pub fn is_current(&self, token: MountToken) -> bool {
        self.mounted && token.0 == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_valid_while_mounted() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.token(), None);

        let token = lifecycle.mount();
        assert!(lifecycle.is_current(token));
        assert_eq!(lifecycle.token(), Some(token));
    }

    #[test]
    fn unmount_invalidates_token() {
        let mut lifecycle = Lifecycle::new();
        let token = lifecycle.mount();
        lifecycle.unmount();
        assert!(!lifecycle.is_current(token));
        assert!(!lifecycle.is_mounted());
    }

    #[test]
    fn remount_invalidates_previous_token() {
        let mut lifecycle = Lifecycle::new();
        let first = lifecycle.mount();
        lifecycle.unmount();
        let second = lifecycle.mount();
        assert!(!lifecycle.is_current(first));
        assert!(lifecycle.is_current(second));
    }
}
