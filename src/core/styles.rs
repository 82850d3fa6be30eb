//! Animation rules injected into the document head at startup

pub const ANIMATION_STYLES: &str = r#"
    .pulse {
        animation: pulse 0.3s ease-in-out;
    }

    @keyframes pulse {
        0% { transform: scale(1); }
        50% { transform: scale(1.2); }
        100% { transform: scale(1); }
    }

    .add-to-cart.added {
        background-color: var(--success) !important;
    }

    .product-card.animate {
        animation: fadeInUp 0.6s ease forwards;
    }

    .feature.animate {
        animation: fadeIn 0.8s ease forwards;
    }

    .contact-form.animate {
        animation: fadeInRight 0.8s ease forwards;
    }

    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }

    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }

    @keyframes fadeInRight {
        from { opacity: 0; transform: translateX(20px); }
        to { opacity: 1; transform: translateX(0); }
    }

    .hamburger.active {
        background-color: transparent;
    }

    .hamburger.active::before {
        transform: rotate(45deg);
        top: 0;
    }

    .hamburger.active::after {
        transform: rotate(-45deg);
        bottom: 0;
    }
"#;
